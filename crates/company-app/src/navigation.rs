//! Route table of the navigation host

use company_core::CompanyId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    CompanyList,
    CompanyAdd,
    CompanyEdit(CompanyId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::CompanyList => "/company".to_string(),
            Route::CompanyAdd => "/company/add".to_string(),
            Route::CompanyEdit(id) => {
                format!("/company/edit/{}", urlencoding::encode(id.as_str()))
            }
        }
    }

    /// Unknown paths fall back to the dashboard
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('?')
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["company"] => Route::CompanyList,
            ["company", "add"] => Route::CompanyAdd,
            ["company", "edit", id] => match urlencoding::decode(id) {
                Ok(id) => Route::CompanyEdit(CompanyId::new(id.into_owned())),
                Err(_) => Route::Dashboard,
            },
            _ => Route::Dashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
