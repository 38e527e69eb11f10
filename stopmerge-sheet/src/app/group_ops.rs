use super::{ProcessedRoute, StopMergeAppError};
use crate::io::{export_file_name, read_sheet, write_sheet, OutputFormat, SheetFormat};
use chrono::NaiveDate;
use itertools::Itertools;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use stopmerge_core::{config::GroupingConfig, model::ExportSchema, pipeline::process_rows};

pub const DEFAULT_ROUTE_NAME: &str = "Rota Padrão";

/// how a grouped route is written out
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub schema: ExportSchema,
    pub format: OutputFormat,
    pub overwrite: bool,
}

/// reads one route sheet, groups its stops and writes the grouped sheet to
/// `output_directory` under [`export_file_name`].
///
/// # Arguments
///
/// * `input` - route sheet to group
/// * `output_directory` - directory receiving the grouped sheet
/// * `route_name` - names the output file
/// * `date` - date stamped into the output file name
pub fn group_sheet(
    input: &Path,
    output_directory: &Path,
    route_name: &str,
    date: NaiveDate,
    config: &GroupingConfig,
    export: ExportOptions,
    max_file_bytes: u64,
) -> Result<ProcessedRoute, StopMergeAppError> {
    let output_file = output_directory.join(export_file_name(route_name, date, export.format));
    group_sheet_into(input, &output_file, route_name, config, export, max_file_bytes)
}

fn group_sheet_into(
    input: &Path,
    output_file: &Path,
    route_name: &str,
    config: &GroupingConfig,
    export: ExportOptions,
    max_file_bytes: u64,
) -> Result<ProcessedRoute, StopMergeAppError> {
    let raw_rows = read_sheet(input, max_file_bytes)?;
    let summary = process_rows(&raw_rows, config)?;
    write_sheet(
        output_file,
        &export.schema.tabulate(&summary.data),
        export.format,
        export.overwrite,
    )?;
    log::info!(
        "route '{route_name}': {} stops grouped into {}, written to {}",
        summary.total_rows,
        summary.grouped_rows,
        output_file.display()
    );
    let original_file_name = file_name(input);
    Ok(ProcessedRoute::new(
        route_name,
        &original_file_name,
        &output_file.display().to_string(),
        summary,
    ))
}

/// groups every supported sheet in `input_directory` independently. each
/// sheet is its own route, named by its file stem. a failing sheet is logged
/// and does not stop the others; the call fails afterward if any sheet failed.
///
/// sheets whose stems sanitize to the same export file name, such as
/// `zona sul.csv` and `zona-sul.xlsx`, get `_1`, `_2`, ... suffixes in file
/// name order so every route keeps its own output file.
pub fn group_directory(
    input_directory: &Path,
    output_directory: &Path,
    date: NaiveDate,
    config: &GroupingConfig,
    export: ExportOptions,
    max_file_bytes: u64,
    parallelism: usize,
) -> Result<Vec<ProcessedRoute>, StopMergeAppError> {
    let inputs: Vec<PathBuf> = std::fs::read_dir(input_directory)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|p| p.is_file() && SheetFormat::is_supported(p))
        .sorted()
        .collect_vec();
    log::info!(
        "found {} route sheets in {}",
        inputs.len(),
        input_directory.display()
    );
    let jobs = assign_output_files(&inputs, output_directory, date, export.format);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .build()
        .map_err(|e| StopMergeAppError::ThreadPoolError(e.to_string()))?;
    let bar = Bar::builder()
        .total(jobs.len())
        .desc("grouping route sheets")
        .build()
        .map_err(StopMergeAppError::BatchError)?;
    let bar = Mutex::new(bar);

    let results = pool.install(|| {
        jobs.par_iter()
            .map(|(input, route_name, output_file)| {
                let result = group_sheet_into(
                    input,
                    output_file,
                    route_name,
                    config,
                    export,
                    max_file_bytes,
                );
                if let Ok(mut b) = bar.lock() {
                    let _ = b.update(1);
                }
                (input, result)
            })
            .collect::<Vec<_>>()
    });
    eprintln!();

    let mut routes = vec![];
    let mut failures = 0;
    for (input, result) in results {
        match result {
            Ok(route) => routes.push(route),
            Err(e) => {
                log::error!("failed grouping {}: {e}", input.display());
                failures += 1;
            }
        }
    }
    if failures > 0 {
        return Err(StopMergeAppError::BatchError(format!(
            "{failures} of {} route sheets failed",
            jobs.len()
        )));
    }
    Ok(routes)
}

/// pairs each input with its route name and a distinct output file.
fn assign_output_files(
    inputs: &[PathBuf],
    output_directory: &Path,
    date: NaiveDate,
    format: OutputFormat,
) -> Vec<(PathBuf, String, PathBuf)> {
    let mut taken: HashSet<String> = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let route_name = route_name_from_path(input);
            let mut output_name = export_file_name(&route_name, date, format);
            let mut n = 0;
            while taken.contains(&output_name) {
                n += 1;
                output_name = export_file_name(&format!("{route_name}_{n}"), date, format);
            }
            if n > 0 {
                log::warn!(
                    "{} shares its export name with another sheet, writing {output_name}",
                    input.display()
                );
            }
            taken.insert(output_name.clone());
            (input.clone(), route_name, output_directory.join(output_name))
        })
        .collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn route_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from(DEFAULT_ROUTE_NAME))
}

#[cfg(test)]
mod tests {
    use super::{group_directory, group_sheet, ExportOptions};
    use crate::app::StopMergeAppError;
    use crate::io::{read_sheet, OutputFormat, DEFAULT_MAX_FILE_BYTES};
    use chrono::NaiveDate;
    use stopmerge_core::{config::GroupingConfig, model::ExportSchema};

    const ROUTE_CSV: &str = "Sequence,Destination Address,Bairro,City,Zipcode/Postal code,Latitude,Longitude\n\
        1,\"Rua A, 10\",Centro,Santos,11010-000,23.551234,46.633211\n\
        2,\"Rua A, 10 - Fundos\",Centro,Santos,11010-000,23.551299,46.633255\n\
        3,\"Rua B, 20\",Centro,Santos,11010-001,23.551234,46.633211\n";

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    fn csv_export(schema: ExportSchema, overwrite: bool) -> ExportOptions {
        ExportOptions {
            schema,
            format: OutputFormat::Csv,
            overwrite,
        }
    }

    #[test]
    fn test_group_sheet_writes_grouped_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("entregas.csv");
        std::fs::write(&input, ROUTE_CSV).unwrap();
        let route = group_sheet(
            &input,
            dir.path(),
            "Zona Sul",
            date(),
            &GroupingConfig::default(),
            csv_export(ExportSchema::Source, false),
            DEFAULT_MAX_FILE_BYTES,
        )
        .unwrap();
        assert_eq!(route.total_rows, 3);
        assert_eq!(route.grouped_rows, 2);
        assert_eq!(route.original_file_name, "entregas.csv");

        let output = dir.path().join("Zona_Sul_31-1-2025.csv");
        let written = std::fs::read_to_string(output).unwrap();
        let lines = written.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "1; 2,\"Rua A, 10\",Centro,Santos,11010-000,23.551234,46.633211"
        );
        assert_eq!(
            lines[2],
            "3,\"Rua B, 20\",Centro,Santos,11010-001,23.551234,46.633211"
        );
    }

    #[test]
    fn test_group_sheet_rejects_missing_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("entregas.csv");
        std::fs::write(&input, "Sequence,Destination Address\n1,\"Rua A, 10\"\n").unwrap();
        let result = group_sheet(
            &input,
            dir.path(),
            "Zona Sul",
            date(),
            &GroupingConfig::default(),
            csv_export(ExportSchema::Source, false),
            DEFAULT_MAX_FILE_BYTES,
        );
        match result {
            Err(StopMergeAppError::ValidationError { source }) => assert_eq!(
                source.to_string(),
                "required field \"latitude\" not found in batch"
            ),
            other => panic!("expected validation error, found {other:?}"),
        }
        assert!(!dir.path().join("Zona_Sul_31-1-2025.csv").exists());
    }

    #[test]
    fn test_group_directory_isolates_failures() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        std::fs::write(input_dir.path().join("norte.csv"), ROUTE_CSV).unwrap();
        std::fs::write(input_dir.path().join("sul.csv"), ROUTE_CSV).unwrap();
        std::fs::write(input_dir.path().join("vazio.csv"), "Sequence,Latitude\n").unwrap();
        std::fs::write(input_dir.path().join("notes.txt"), "ignored").unwrap();

        let result = group_directory(
            input_dir.path(),
            output_dir.path(),
            date(),
            &GroupingConfig::default(),
            csv_export(ExportSchema::Localized, false),
            DEFAULT_MAX_FILE_BYTES,
            2,
        );
        assert!(matches!(result, Err(StopMergeAppError::BatchError(_))));
        assert!(output_dir.path().join("norte_31-1-2025.csv").exists());
        assert!(output_dir.path().join("sul_31-1-2025.csv").exists());
        assert!(!output_dir.path().join("vazio_31-1-2025.csv").exists());
    }

    #[test]
    fn test_group_directory_success() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        std::fs::write(input_dir.path().join("norte.csv"), ROUTE_CSV).unwrap();
        let routes = group_directory(
            input_dir.path(),
            output_dir.path(),
            date(),
            &GroupingConfig::default(),
            csv_export(ExportSchema::Source, false),
            DEFAULT_MAX_FILE_BYTES,
            1,
        )
        .unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].route_name, "norte");
        assert_eq!(routes[0].grouped_rows, 2);
    }

    #[test]
    fn test_group_directory_keeps_colliding_routes_apart() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let route = |sequence: &str| {
            format!(
                "Sequence,Destination Address,Latitude,Longitude\n\
                 {sequence},\"Rua A, 10\",23.551234,46.633211\n"
            )
        };
        std::fs::write(input_dir.path().join("zona sul.csv"), route("1")).unwrap();
        std::fs::write(input_dir.path().join("zona-sul.csv"), route("9")).unwrap();

        let routes = group_directory(
            input_dir.path(),
            output_dir.path(),
            date(),
            &GroupingConfig::default(),
            csv_export(ExportSchema::Source, true),
            DEFAULT_MAX_FILE_BYTES,
            2,
        )
        .unwrap();
        assert_eq!(routes.len(), 2);
        assert_ne!(routes[0].output_file, routes[1].output_file);
        assert_eq!(routes[0].route_name, "zona sul");
        assert_eq!(routes[1].route_name, "zona-sul");

        let first = output_dir.path().join("zona_sul_31-1-2025.csv");
        let second = output_dir.path().join("zona_sul_1_31-1-2025.csv");
        assert_eq!(routes[0].output_file, first.display().to_string());
        assert_eq!(routes[1].output_file, second.display().to_string());
        for (path, sequence) in [(first, "1"), (second, "9")] {
            let rows = read_sheet(&path, DEFAULT_MAX_FILE_BYTES).unwrap();
            let cell = rows[0].get("Sequencia").map(|c| c.to_cell_string());
            assert_eq!(cell.as_deref(), Some(sequence), "{path:?}");
        }
    }

    #[test]
    fn test_group_sheet_writes_xlsx_by_default_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("entregas.csv");
        std::fs::write(&input, ROUTE_CSV).unwrap();
        let export = ExportOptions {
            schema: ExportSchema::Localized,
            format: OutputFormat::default(),
            overwrite: false,
        };
        let route = group_sheet(
            &input,
            dir.path(),
            "Zona Sul",
            date(),
            &GroupingConfig::default(),
            export,
            DEFAULT_MAX_FILE_BYTES,
        )
        .unwrap();
        let output = dir.path().join("Zona_Sul_31-1-2025.xlsx");
        assert_eq!(route.output_file, output.display().to_string());

        let rows = read_sheet(&output, DEFAULT_MAX_FILE_BYTES).unwrap();
        assert_eq!(rows.len(), 2);
        let sequence = rows[0].get("Sequência").map(|c| c.to_cell_string());
        assert_eq!(sequence.as_deref(), Some("1; 2"));
    }
}
