use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::generator::Athlete;

const JSON_FILE: &str = "data.json";
const CSV_FILE: &str = "calisthenics_data.csv";

/// Writes the generated dataset as the engine's JSON asset and a flat CSV
/// of the raw table.
pub struct DatasetExporter {
    output_dir: PathBuf,
}

impl DatasetExporter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn write_json(&self, athletes: &[Athlete]) -> Result<PathBuf, Box<dyn std::error::Error>> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(JSON_FILE);
        let json = serde_json::to_string_pretty(athletes)?;
        fs::write(&path, json)?;
        Ok(path)
    }

    pub fn write_csv(&self, athletes: &[Athlete]) -> Result<PathBuf, Box<dyn std::error::Error>> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(CSV_FILE);

        let progress = ProgressBar::new(athletes.len() as u64);
        progress.set_style(ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len}",
        )?);
        progress.set_message("Writing CSV");

        let mut out = String::from(
            "athlete_id,name,max_pullups,max_muscleups,strength_score,category\n",
        );
        for athlete in athletes {
            out.push_str(&csv_row(athlete));
            progress.inc(1);
        }
        progress.finish_and_clear();

        fs::write(&path, out)?;
        Ok(path)
    }
}

fn csv_row(athlete: &Athlete) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        athlete.id,
        athlete.label,
        athlete.stats.pullups,
        athlete.stats.muscleups,
        athlete.raw_value,
        athlete.category.display_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::AthleteStats;
    use constants::category::Category;

    fn sample() -> Athlete {
        Athlete {
            id: 3,
            label: "Athlete_3".into(),
            value: 0.5,
            raw_value: 55.0,
            category: Category::Elite,
            stats: AthleteStats {
                pullups: 30,
                muscleups: 4,
            },
            position: [7.5, 0.0, -14.0],
        }
    }

    #[test]
    fn csv_row_lists_raw_table_columns() {
        assert_eq!(csv_row(&sample()), "3,Athlete_3,30,4,55,Elite\n");
    }

    #[test]
    fn json_matches_engine_data_contract() {
        let json = serde_json::to_value([sample()]).unwrap();
        let first = &json[0];
        assert_eq!(first["id"], 3);
        assert_eq!(first["label"], "Athlete_3");
        assert_eq!(first["category"], "Elite");
        assert_eq!(first["stats"]["pullups"], 30);
        assert_eq!(first["stats"]["muscleups"], 4);
        assert_eq!(first["position"][1], 0.0);
    }
}
