//! Grouped listing results.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::Product;
use crate::search::collate;

/// Products of one category, in listing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    /// Category name.
    pub category: &'a str,
    /// Products in this category.
    pub products: Vec<&'a Product>,
}

impl<'a> CategoryGroup<'a> {
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Partition an ordered product list by category.
///
/// Products keep their relative order inside each group. Groups are ordered
/// by category name, independently of the product ordering.
pub fn group_by_category<'a>(products: &[&'a Product]) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();

    for &product in products {
        let category = product.category.as_str();
        let slot = *slots.entry(category).or_insert_with(|| {
            groups.push(CategoryGroup {
                category,
                products: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].products.push(product);
    }

    groups.sort_by(|a, b| collate::compare(a.category, b.category));
    groups
}

/// Total number of products across groups.
pub fn product_count(groups: &[CategoryGroup<'_>]) -> usize {
    groups.iter().map(CategoryGroup::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_sorted_by_category_and_keep_product_order() {
        let products = vec![
            Product::new("Zeta", "Shampoos"),
            Product::new("Beta", "Aditivos"),
            Product::new("Alfa", "Shampoos"),
        ];
        let refs: Vec<&Product> = products.iter().collect();

        let groups = group_by_category(&refs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Aditivos");
        assert_eq!(groups[1].category, "Shampoos");

        let names: Vec<&str> = groups[1].products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alfa"]);
        assert_eq!(product_count(&groups), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }
}
