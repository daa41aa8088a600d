use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct CleanEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CleanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitoring_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitoring_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🧹 Starting credential cleaning");

        let (fields, records) = self.pipeline.extract().await?;
        tracing::info!("📂 Loaded {} record(s), {} column(s)", records.len(), fields.len());
        self.monitor.log_stats("Extract");

        let report = self.pipeline.dedup(&records)?;
        for line in &report.log {
            tracing::info!("📝 {}", line);
        }
        tracing::info!(
            "📊 Original: {}, exact duplicates: {}, domain duplicates: {}, clean: {}",
            report.original_count,
            report.exact_duplicates_removed,
            report.domain_duplicates_removed,
            report.cleaned_count()
        );
        self.monitor.log_stats("Dedup");

        let output_path = self.pipeline.load(&fields, &report).await?;
        tracing::info!("💾 Cleaned export saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
