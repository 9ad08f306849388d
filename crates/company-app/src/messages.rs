//! User-facing messages

pub const LIST_LOAD_FAILED: &str = "Error loading companies";
pub const LIST_EMPTY: &str = "No companies found";
pub const DELETE_FAILED: &str = "Error deleting company. Please try again.";

pub const FORM_LOAD_FAILED: &str = "Error loading company data";
pub const SAVE_FAILED: &str = "Error saving company. Please try again.";
pub const CREATED: &str = "Company created successfully!";
pub const UPDATED: &str = "Company updated successfully!";

pub const TITLE_CREATE: &str = "Add New Company";
pub const TITLE_EDIT: &str = "Edit Company";

pub fn delete_confirmation(company_name: &str) -> String {
    format!(
        "Are you sure you want to delete the company \"{}\"? This action cannot be undone.",
        company_name
    )
}
