// Template context structures for Askama templates.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::take_flash;
use crate::models::table::registry::{self, NavGroup, NavLink};
use crate::models::tenant::Tenant;

/// Common context shared by all pages.
/// Templates access these as `ctx.tenant.name`, `ctx.nav_groups`, etc.
pub struct PageContext {
    pub app_name: String,
    pub tenant: Tenant,
    /// Tenants offered by the switcher in the sidebar.
    pub tenants: Vec<Tenant>,
    pub flash: Option<String>,
    pub nav_groups: Vec<NavGroup>,
    pub current_path: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, tenant: Tenant, tenants: Vec<Tenant>, current_path: &str) -> Self {
        Self {
            app_name: "ERP".to_string(),
            tenant,
            tenants,
            flash: take_flash(session),
            nav_groups: registry::navigation(),
            current_path: current_path.to_string(),
            csrf_token: csrf::get_or_create_token(session),
        }
    }

    pub fn is_current(&self, link: &NavLink) -> bool {
        self.current_path == link.url
    }

    pub fn is_current_tenant(&self, tenant: &Tenant) -> bool {
        self.tenant.id == tenant.id
    }
}

mod table;

pub use self::table::TablePageTemplate;
