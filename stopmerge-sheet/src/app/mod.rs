mod export_schema_option;
mod group_ops;
mod operation;
mod processed_route;
mod stopmerge_app;
mod stopmerge_app_error;

pub use export_schema_option::ExportSchemaOption;
pub use group_ops::{group_directory, group_sheet, ExportOptions, DEFAULT_ROUTE_NAME};
pub use operation::StopMergeOperation;
pub use processed_route::ProcessedRoute;
pub use stopmerge_app::StopMergeApp;
pub use stopmerge_app_error::StopMergeAppError;
