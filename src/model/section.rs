//! Section and entry types.

use serde::{Deserialize, Serialize};

/// A titled group of entries, rendered under a section banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Banner title (e.g., "WORK EXPERIENCE")
    pub title: String,

    /// Entries in rendering order
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Section {
    /// Create a new empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Append any entry.
    pub fn entry(mut self, entry: impl Into<Entry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// Append a job entry.
    pub fn job(self, job: JobEntry) -> Self {
        self.entry(job)
    }

    /// Append an education entry.
    pub fn education(self, education: EducationEntry) -> Self {
        self.entry(education)
    }

    /// Append a skill group.
    pub fn skills(self, group: SkillGroup) -> Self {
        self.entry(group)
    }

    /// Check if the section has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One record within a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    /// A position held at an organization
    Job(JobEntry),

    /// A degree or course of study
    Education(EducationEntry),

    /// A labelled list of skills
    Skills(SkillGroup),
}

impl From<JobEntry> for Entry {
    fn from(job: JobEntry) -> Self {
        Entry::Job(job)
    }
}

impl From<EducationEntry> for Entry {
    fn from(education: EducationEntry) -> Self {
        Entry::Education(education)
    }
}

impl From<SkillGroup> for Entry {
    fn from(group: SkillGroup) -> Self {
        Entry::Skills(group)
    }
}

/// A job with title, organization, date range and bullet points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEntry {
    /// Job title
    pub title: String,

    /// Employer or client
    pub organization: String,

    /// Free-form date range (e.g., "2022 – Present")
    pub date_range: String,

    /// Accomplishments, in order
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl JobEntry {
    /// Create a job entry without bullets.
    pub fn new(
        title: impl Into<String>,
        organization: impl Into<String>,
        date_range: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            organization: organization.into(),
            date_range: date_range.into(),
            bullets: Vec::new(),
        }
    }

    /// Append a bullet point.
    pub fn bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullets.push(bullet.into());
        self
    }

    /// Append several bullet points.
    pub fn bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets.extend(bullets.into_iter().map(Into::into));
        self
    }
}

/// A degree entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Degree name (e.g., "M.Ed., Education")
    pub degree: String,

    /// Awarding institution
    pub institution: String,

    /// Whether the degree is still being pursued
    #[serde(default)]
    pub in_progress: bool,
}

impl EducationEntry {
    /// Create a completed degree entry.
    pub fn new(degree: impl Into<String>, institution: impl Into<String>) -> Self {
        Self {
            degree: degree.into(),
            institution: institution.into(),
            in_progress: false,
        }
    }

    /// Mark the degree as in progress.
    pub fn in_progress(mut self, in_progress: bool) -> Self {
        self.in_progress = in_progress;
        self
    }
}

/// A labelled, comma-joined list of skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group label (e.g., "TECHNICAL SKILLS")
    pub label: String,

    /// Skills, in order
    #[serde(default)]
    pub items: Vec<String>,
}

impl SkillGroup {
    /// Create an empty skill group.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Append a skill.
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Append several skills.
    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Items joined with ", ".
    pub fn joined_items(&self) -> String {
        self.items.join(", ")
    }
}
