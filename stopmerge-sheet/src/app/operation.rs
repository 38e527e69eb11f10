use super::{
    group_directory, group_sheet, ExportOptions, ExportSchemaOption, StopMergeAppError,
    DEFAULT_ROUTE_NAME,
};
use crate::io::{OutputFormat, DEFAULT_MAX_FILE_BYTES};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use stopmerge_core::{config::GroupingConfig, model::ExportSchema};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum StopMergeOperation {
    /// group the stops of a single route sheet
    Group {
        /// route sheet (.xlsx, .xlsm, .xls, .ods or .csv)
        #[arg(long)]
        input: String,
        /// directory receiving the grouped sheet
        #[arg(long)]
        output_directory: String,
        /// route name, used to name the output file
        #[arg(long, default_value_t = String::from(DEFAULT_ROUTE_NAME))]
        route_name: String,
        /// .toml or .json file with grouping parameters
        #[arg(long)]
        configuration_file: Option<String>,
        #[arg(long, value_enum, default_value_t = ExportSchemaOption::Source)]
        schema: ExportSchemaOption,
        #[arg(long, value_enum, default_value_t = OutputFormat::Xlsx)]
        output_format: OutputFormat,
        /// optional JSON file receiving the grouped route and its counts
        #[arg(long)]
        summary_file: Option<String>,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
        #[arg(long, default_value_t = DEFAULT_MAX_FILE_BYTES)]
        max_file_bytes: u64,
    },
    /// group every route sheet in a directory, one route per sheet
    Batch {
        #[arg(long)]
        input_directory: String,
        #[arg(long)]
        output_directory: String,
        #[arg(long)]
        configuration_file: Option<String>,
        #[arg(long, value_enum, default_value_t = ExportSchemaOption::Source)]
        schema: ExportSchemaOption,
        #[arg(long, value_enum, default_value_t = OutputFormat::Xlsx)]
        output_format: OutputFormat,
        /// optional JSON file receiving every grouped route and its counts
        #[arg(long)]
        summary_file: Option<String>,
        #[arg(long, default_value_t = 1)]
        parallelism: usize,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
        #[arg(long, default_value_t = DEFAULT_MAX_FILE_BYTES)]
        max_file_bytes: u64,
    },
}

impl StopMergeOperation {
    pub fn run(&self) -> Result<(), StopMergeAppError> {
        let today = chrono::Local::now().date_naive();
        match self {
            StopMergeOperation::Group {
                input,
                output_directory,
                route_name,
                configuration_file,
                schema,
                output_format,
                summary_file,
                overwrite,
                max_file_bytes,
            } => {
                let config = load_config(configuration_file.as_ref())?;
                let route = group_sheet(
                    Path::new(input),
                    Path::new(output_directory),
                    route_name,
                    today,
                    &config,
                    export_options(schema, output_format, overwrite),
                    *max_file_bytes,
                )?;
                eprintln!(
                    "grouped {} stops into {}: {}",
                    route.total_rows, route.grouped_rows, route.output_file
                );
                match summary_file {
                    Some(f) => write_summary(f, &route),
                    None => Ok(()),
                }
            }
            StopMergeOperation::Batch {
                input_directory,
                output_directory,
                configuration_file,
                schema,
                output_format,
                summary_file,
                parallelism,
                overwrite,
                max_file_bytes,
            } => {
                let config = load_config(configuration_file.as_ref())?;
                let routes = group_directory(
                    Path::new(input_directory),
                    Path::new(output_directory),
                    today,
                    &config,
                    export_options(schema, output_format, overwrite),
                    *max_file_bytes,
                    *parallelism,
                )?;
                eprintln!("finished, grouped {} route sheets", routes.len());
                match summary_file {
                    Some(f) => write_summary(f, &routes),
                    None => Ok(()),
                }
            }
        }
    }
}

fn export_options(
    schema: &ExportSchemaOption,
    format: &OutputFormat,
    overwrite: &bool,
) -> ExportOptions {
    ExportOptions {
        schema: ExportSchema::from(schema),
        format: *format,
        overwrite: *overwrite,
    }
}

fn load_config(configuration_file: Option<&String>) -> Result<GroupingConfig, StopMergeAppError> {
    let config = match configuration_file {
        None => GroupingConfig::from_env(),
        Some(f) => {
            log::info!("reading grouping configuration from {f}");
            GroupingConfig::from_file(Path::new(f))
        }
    }?;
    log::debug!("grouping configuration: {config:?}");
    Ok(config)
}

fn write_summary<T: Serialize>(summary_file: &str, summary: &T) -> Result<(), StopMergeAppError> {
    let file = File::create(summary_file).map_err(|e| StopMergeAppError::SummaryWriteError {
        filepath: summary_file.to_string(),
        error: e.to_string(),
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary).map_err(|e| {
        StopMergeAppError::SummaryWriteError {
            filepath: summary_file.to_string(),
            error: e.to_string(),
        }
    })
}
