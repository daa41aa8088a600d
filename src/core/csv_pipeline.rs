use crate::core::pipeline::run_dedup;
use crate::domain::model::{CleanReport, FieldSet, Record};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

/// Pipeline over a header-delimited CSV export: parse, dedup, serialize back
/// out with a date-stamped filename. The dedup stage is the pure core; this
/// type owns only the collaborator concerns around it.
pub struct CsvCleanPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvCleanPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_filename(&self, extension: &str) -> String {
        format!(
            "{}_cleaned_{}.{}",
            self.config.output_prefix(),
            chrono::Local::now().format("%Y-%m-%d"),
            extension
        )
    }

    fn serialize_csv(&self, fields: &FieldSet, records: &[Record]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(fields)?;
        for record in records {
            // Column order comes from the declared field set, never the map.
            let row: Vec<&str> = fields.iter().map(|f| record.get(f)).collect();
            writer.write_record(&row)?;
        }
        writer
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.to_string()).into())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvCleanPipeline<S, C> {
    async fn extract(&self) -> Result<(FieldSet, Vec<Record>)> {
        tracing::debug!("Reading export file: {}", self.config.input_file());
        let raw = self.storage.read_file(self.config.input_file()).await?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(raw.as_slice());

        let fields: FieldSet = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;

            // Blank rows never reach the core.
            if row.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            let mut record = Record::new();
            for (field, value) in fields.iter().zip(row.iter()) {
                record.set(field.clone(), value);
            }
            records.push(record);
        }

        tracing::debug!("Parsed {} record(s), {} column(s)", records.len(), fields.len());
        Ok((fields, records))
    }

    fn dedup(&self, records: &[Record]) -> Result<CleanReport> {
        run_dedup(records, self.config.field_profile())
    }

    async fn load(&self, fields: &FieldSet, report: &CleanReport) -> Result<String> {
        let csv_name = self.output_filename("csv");
        let csv_data = self.serialize_csv(fields, &report.cleaned)?;

        tracing::debug!("Writing cleaned CSV ({} bytes) to storage", csv_data.len());
        self.storage.write_file(&csv_name, &csv_data).await?;

        if self.config.json_summary() {
            let summary = serde_json::json!({
                "original_count": report.original_count,
                "exact_duplicates_removed": report.exact_duplicates_removed,
                "domain_duplicates_removed": report.domain_duplicates_removed,
                "cleaned_count": report.cleaned_count(),
                "log": report.log,
            });
            let json_name = self.output_filename("json");
            self.storage
                .write_file(&json_name, serde_json::to_string_pretty(&summary)?.as_bytes())
                .await?;
            tracing::debug!("Summary written to {}", json_name);
        }

        Ok(format!("{}/{}", self.config.output_path(), csv_name))
    }
}
