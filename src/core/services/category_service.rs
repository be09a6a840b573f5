use uuid::Uuid;

use crate::domain::{Allocation, Category};

use super::{ServiceError, ServiceResult};

/// Guards the category rules the engine's data model relies on.
pub struct CategoryService;

impl CategoryService {
    /// Category names are unique per household, compared case-insensitively.
    pub fn ensure_unique_name(
        categories: &[Category],
        household_id: Uuid,
        candidate: &str,
        exclude: Option<Uuid>,
    ) -> ServiceResult<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        let duplicate = categories.iter().any(|category| {
            category.household_id == household_id
                && category.name.trim().to_ascii_lowercase() == normalized
                && exclude.map_or(true, |id| category.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Category `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }

    /// Deletion is restricted while allocations reference the category;
    /// archive it via the hidden flag instead.
    pub fn ensure_removable(category_id: Uuid, allocations: &[Allocation]) -> ServiceResult<()> {
        if allocations
            .iter()
            .any(|allocation| allocation.category_id == category_id)
        {
            return Err(ServiceError::Invalid(
                "Category has linked allocations".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RolloverPolicy;

    #[test]
    fn duplicate_names_are_rejected_per_household() {
        let household = Uuid::new_v4();
        let categories = vec![Category::new(household, "Groceries")];
        assert!(CategoryService::ensure_unique_name(
            &categories,
            household,
            "  groceries ",
            None
        )
        .is_err());
        // same name in another household is fine
        assert!(CategoryService::ensure_unique_name(
            &categories,
            Uuid::new_v4(),
            "Groceries",
            None
        )
        .is_ok());
        // renaming a category to itself is fine
        assert!(CategoryService::ensure_unique_name(
            &categories,
            household,
            "Groceries",
            Some(categories[0].id)
        )
        .is_ok());
    }

    #[test]
    fn referenced_categories_cannot_be_removed() {
        let household = Uuid::new_v4();
        let category = Category::new(household, "Rent");
        let allocation = Allocation::new_fixed(
            Uuid::new_v4(),
            category.id,
            100_000,
            RolloverPolicy::SameCategory,
        );
        assert!(CategoryService::ensure_removable(category.id, &[allocation]).is_err());
        assert!(CategoryService::ensure_removable(category.id, &[]).is_ok());
    }
}
