use serde::{Deserialize, Serialize};

const DEFAULT_NAME: &str = "PRECIOUS GRACE DEBORAH S. MANUCOM";
const DEFAULT_COURSE: &str = "BS in Computer Science";
const DEFAULT_SCHOOL: &str = "Polytechnic University of the Philippines";
const DEFAULT_ABOUT: &str = "Organized and results-driven Computer Science student with proven \
leadership in tech communities and event execution. Currently serving as President of DEVCON \
Manila, focused on scaling initiatives and bridging the gender gap in tech. Former COO and \
Director of Programs of AWS Cloud Club PUP Manila, Former Ambassador of AWSUG BuildHers+ \
Philippines, Alumni Data Science Fellow Lead at GDSC PUP Manila, Former Executive Auditor at \
PUP Sandiwa, DOST Lodi Intern, and Tutorials Dojo Intern Developer. DOST Scholar, AWS Certified \
Cloud Practitioner, and DataCamp Scholar.";
const DEFAULT_LINKEDIN: &str = "https://www.linkedin.com/in/precious-grace-deborah-manucom-6774b3253/";
const DEFAULT_GITHUB: &str = "https://github.com/Debb1ie";

const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C/C++",
    "JavaScript",
    "SQL",
    "R",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "Machine Learning",
    "AI & Predictive Modeling",
    "Data Analysis",
    "Power BI",
    "Excel",
    "AWS (Certified)",
    "Google Cloud",
    "BigQuery",
    "Git & GitHub",
    "Notion",
    "Slack",
    "WordPress",
    "Canva",
    "Move Smart Contracts",
    "ICP Motoko",
    "Public Speaking",
    "Team Building",
    "Event Management",
    "Community Building",
    "Project Management",
    "Technical Presentation",
];

/// The record the page displays. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub name: String,
    pub course: String,
    pub school: String,
    pub about: String,
    pub linkedin: String,
    pub github: String,
    pub skills: Vec<String>,
}

impl PortfolioRecord {
    /// The static record shown before, and instead of, any on-chain data.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            course: DEFAULT_COURSE.to_string(),
            school: DEFAULT_SCHOOL.to_string(),
            about: DEFAULT_ABOUT.to_string(),
            linkedin: DEFAULT_LINKEDIN.to_string(),
            github: DEFAULT_GITHUB.to_string(),
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for PortfolioRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields of the on-chain portfolio object. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialPortfolio {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    /// Comma-separated list.
    #[serde(default)]
    pub skills: Option<String>,
}

impl PartialPortfolio {
    /// Fills every absent or empty field from `defaults`.
    ///
    /// Skills are all-or-nothing: a `skills` string with at least one
    /// non-blank entry replaces the whole list, anything else keeps the
    /// default list verbatim.
    pub fn merge_with_defaults(self, defaults: &PortfolioRecord) -> PortfolioRecord {
        let skills = self
            .skills
            .map(|raw| split_skills(&raw))
            .filter(|skills| !skills.is_empty())
            .unwrap_or_else(|| defaults.skills.clone());

        PortfolioRecord {
            name: non_empty(self.name).unwrap_or_else(|| defaults.name.clone()),
            course: non_empty(self.course).unwrap_or_else(|| defaults.course.clone()),
            school: non_empty(self.school).unwrap_or_else(|| defaults.school.clone()),
            about: non_empty(self.about).unwrap_or_else(|| defaults.about.clone()),
            linkedin: non_empty(self.linkedin_url).unwrap_or_else(|| defaults.linkedin.clone()),
            github: non_empty(self.github_url).unwrap_or_else(|| defaults.github.clone()),
            skills,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Splits on commas, trims each entry and drops the blank ones.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_fully_populated() {
        let record = PortfolioRecord::default();
        assert!(!record.name.is_empty());
        assert!(!record.course.is_empty());
        assert!(!record.school.is_empty());
        assert!(!record.about.is_empty());
        assert!(record.linkedin.starts_with("https://"));
        assert!(record.github.starts_with("https://"));
        assert_eq!(record.skills.len(), 30);
        assert_eq!(record.skills[0], "Python");
    }

    #[test]
    fn skills_are_split_and_trimmed() {
        assert_eq!(split_skills("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn blank_skill_entries_are_dropped() {
        assert_eq!(split_skills("a,,b"), vec!["a", "b"]);
        assert_eq!(split_skills(" Rust , ,Move, "), vec!["Rust", "Move"]);
        assert!(split_skills("  ").is_empty());
        assert!(split_skills(" , ,").is_empty());
    }

    #[test]
    fn blank_skills_keep_default_list() {
        let defaults = PortfolioRecord::default();
        for raw in ["  ", ",", " , , "] {
            let partial = PartialPortfolio {
                skills: Some(raw.into()),
                ..Default::default()
            };
            let record = partial.merge_with_defaults(&defaults);
            assert_eq!(record.skills, defaults.skills);
            assert!(record.skills.iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn missing_field_falls_back_individually() {
        let defaults = PortfolioRecord::default();
        let partial = PartialPortfolio {
            name: Some("Ada".into()),
            course: Some("BS Math".into()),
            school: Some("Cambridge".into()),
            about: None,
            linkedin_url: Some("https://linkedin.example/ada".into()),
            github_url: Some("https://github.example/ada".into()),
            skills: Some("Rust".into()),
        };

        let record = partial.merge_with_defaults(&defaults);
        assert_eq!(record.name, "Ada");
        assert_eq!(record.course, "BS Math");
        assert_eq!(record.about, defaults.about);
        assert_eq!(record.skills, vec!["Rust"]);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let defaults = PortfolioRecord::default();
        let partial = PartialPortfolio {
            name: Some(String::new()),
            skills: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(partial.merge_with_defaults(&defaults), defaults);
    }

    #[test]
    fn deserializes_from_object_fields() {
        let partial: PartialPortfolio = serde_json::from_value(serde_json::json!({
            "id": { "id": "0x1" },
            "name": "Ada",
            "github_url": "https://github.example/ada"
        }))
        .unwrap();

        assert_eq!(partial.name.as_deref(), Some("Ada"));
        assert_eq!(partial.github_url.as_deref(), Some("https://github.example/ada"));
        assert!(partial.skills.is_none());
    }
}
