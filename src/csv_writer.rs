use anyhow::Result;
use csv::Writer;
use std::fs::File;
use std::path::Path;

use crate::state::PageSnapshot;

/// One row per completed load: what the page showed and where it came from.
pub struct CsvExporter {
    writer: Writer<File>,
}

impl CsvExporter {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.writer.write_record([
            "network",
            "name",
            "course",
            "school",
            "about",
            "linkedin",
            "github",
            "skills",
            "notice",
        ])?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_snapshot(&mut self, snapshot: &PageSnapshot) -> Result<()> {
        let record = &snapshot.record;
        let skills = record.skills.join("; ");
        self.writer.write_record([
            snapshot.network.config().display_name,
            record.name.as_str(),
            record.course.as_str(),
            record.school.as_str(),
            record.about.as_str(),
            record.linkedin.as_str(),
            record.github.as_str(),
            skills.as_str(),
            snapshot.notice.as_str(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn finalize(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PortfolioRecord;
    use crate::network::Network;

    #[test]
    fn writes_one_row_per_snapshot() {
        let path = std::env::temp_dir().join(format!("portfolio-{}.csv", std::process::id()));
        let snapshot = PageSnapshot {
            record: PortfolioRecord {
                skills: vec!["Rust".into(), "Move".into()],
                ..PortfolioRecord::default()
            },
            network: Network::Testnet,
            loading: false,
            notice: "Note: offline, too".into(),
        };

        let mut exporter = CsvExporter::new(&path).unwrap();
        exporter.write_header().unwrap();
        exporter.write_snapshot(&snapshot).unwrap();
        exporter.finalize().unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Testnet");
        assert_eq!(&rows[0][7], "Rust; Move");
        assert_eq!(&rows[0][8], "Note: offline, too");
    }
}
