pub mod enum_handlers;
pub mod leave_handlers;
pub mod onboarding_handlers;
pub mod table_handlers;
pub mod tenant_handlers;
