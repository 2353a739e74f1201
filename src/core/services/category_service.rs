use crate::domain::Category;
use crate::store::AppState;

use super::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    /// Builds a custom category whose id is a slug of `name`.
    pub fn create(state: &AppState, name: &str, color: &str) -> ServiceResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::Invalid("Category name is required".into()));
        }
        let id = slug(name);
        if id.is_empty() {
            return Err(ServiceError::Invalid(format!(
                "Category `{}` needs at least one letter or digit",
                name
            )));
        }
        if state.category(&id).is_some() {
            return Err(ServiceError::Invalid(format!(
                "Category `{}` already exists",
                name
            )));
        }
        Ok(Category::new(id, name, color))
    }

    pub fn list(state: &AppState) -> Vec<&Category> {
        state.categories.iter().collect()
    }
}

fn slug(name: &str) -> String {
    let mut out = String::new();
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    out
}
