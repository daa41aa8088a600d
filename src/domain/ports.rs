use crate::config::profile::FieldProfile;
use crate::domain::model::{CleanReport, FieldSet, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_prefix(&self) -> &str;
    fn field_profile(&self) -> &FieldProfile;
    fn json_summary(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<(FieldSet, Vec<Record>)>;
    fn dedup(&self, records: &[Record]) -> Result<CleanReport>;
    async fn load(&self, fields: &FieldSet, report: &CleanReport) -> Result<String>;
}
