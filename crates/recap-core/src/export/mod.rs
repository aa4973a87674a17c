//! Meeting summary export.
//!
//! This module turns a fetched [`MeetingSummary`] into an ordered set of
//! flat rows, one per task, reflection, comment, or reply, and derives the
//! artifact name for the resulting CSV document:
//! - [`SummaryExporter`]: the transform, dispatching on meeting kind
//! - [`ActionRow`] / [`RetroRow`]: the two row schemas
//! - [`FileNameParts`]: the artifact-name derivation
//!
//! # Example
//!
//! ```rust
//! use recap_core::export::SummaryExporter;
//!
//! let exporter = SummaryExporter::with_defaults();
//! // let export = exporter.export(&summary).expect("known meeting kind");
//! // let csv = export.to_csv();
//! ```

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::csv::{self, CsvRecord};
use crate::richtext::{DocFlattener, FlattenRichText};
use crate::summary::{
    ActionMeeting, DiscussionKind, MeetingKind, MeetingSummary, RetrospectiveMeeting,
};

/// Attendance status carried on action rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// The member checked in to the meeting.
    Present,
    /// The member did not check in.
    Absent,
}

impl AttendanceStatus {
    /// Returns the cell value for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

/// The kind of an action-meeting row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionRowKind {
    Task,
    Comment,
    Reply,
}

impl ActionRowKind {
    /// Returns the cell value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Comment => "Comment",
            Self::Reply => "Reply",
        }
    }
}

/// The kind of a retrospective row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetroRowKind {
    Task,
    Reflection,
    Comment,
    Reply,
}

impl RetroRowKind {
    /// Returns the cell value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Reflection => "Reflection",
            Self::Comment => "Comment",
            Self::Reply => "Reply",
        }
    }
}

/// One flat record extracted from an action meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRow {
    /// Display name of the row's author.
    pub author: String,
    /// Attendance status. Comment and reply rows always read `present`.
    pub status: AttendanceStatus,
    /// Plain text of the associated agenda item, or empty.
    pub agenda_item: String,
    /// What the row represents.
    #[serde(rename = "type")]
    pub kind: ActionRowKind,
    /// Creation timestamp, RFC 3339; empty on placeholder rows.
    pub created_at: String,
    /// Parent comment's text for reply rows, otherwise empty.
    pub reply_to: String,
    /// Flattened body content.
    pub content: String,
}

impl CsvRecord for ActionRow {
    fn headers() -> &'static [&'static str] {
        &[
            "author",
            "status",
            "agendaItem",
            "type",
            "createdAt",
            "replyTo",
            "content",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.author.clone(),
            self.status.as_str().to_string(),
            self.agenda_item.clone(),
            self.kind.as_str().to_string(),
            self.created_at.clone(),
            self.reply_to.clone(),
            self.content.clone(),
        ]
    }
}

/// One flat record extracted from a retrospective meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetroRow {
    /// Title of the reflection group the row belongs to.
    pub title: String,
    /// Display name of the row's author. Reflection rows are anonymized.
    pub author: String,
    /// Vote count of the group, duplicated across its rows.
    pub votes: u32,
    /// What the row represents.
    #[serde(rename = "type")]
    pub kind: RetroRowKind,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Parent comment's text for reply rows, otherwise empty.
    pub reply_to: String,
    /// The prompt a reflection answered, empty on other rows.
    pub prompt: String,
    /// Flattened body content.
    pub content: String,
}

impl CsvRecord for RetroRow {
    fn headers() -> &'static [&'static str] {
        &[
            "title",
            "author",
            "votes",
            "type",
            "createdAt",
            "replyTo",
            "prompt",
            "content",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.author.clone(),
            self.votes.to_string(),
            self.kind.as_str().to_string(),
            self.created_at.clone(),
            self.reply_to.clone(),
            self.prompt.clone(),
            self.content.clone(),
        ]
    }
}

/// The rows extracted from one meeting, keyed by schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRows {
    /// Rows of an action meeting.
    Action(Vec<ActionRow>),
    /// Rows of a retrospective meeting.
    Retrospective(Vec<RetroRow>),
}

impl ExportRows {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Self::Action(rows) => rows.len(),
            Self::Retrospective(rows) => rows.len(),
        }
    }

    /// Returns true if no rows were extracted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the rows as a CSV document with header row and leading BOM.
    pub fn to_csv(&self) -> String {
        match self {
            Self::Action(rows) => csv::render(rows),
            Self::Retrospective(rows) => csv::render(rows),
        }
    }
}

/// The pieces the artifact name is assembled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNameParts {
    /// Product prefix, e.g. `Recap`.
    pub product: String,
    /// Capitalized meeting type label, e.g. `Action`.
    pub meeting_label: String,
    /// Name of the team.
    pub team_name: String,
    /// Date the meeting ended (UTC).
    pub end_date: NaiveDate,
}

impl FileNameParts {
    /// Assembles the artifact file name.
    ///
    /// Month and day are 1-indexed and not zero-padded: a meeting ending
    /// 2021-03-07 yields `..._2021-3-7.csv`.
    pub fn file_name(&self) -> String {
        format!(
            "{}{}_{}_{}-{}-{}.csv",
            self.product,
            self.meeting_label,
            self.team_name,
            self.end_date.year(),
            self.end_date.month(),
            self.end_date.day()
        )
    }
}

/// The result of exporting one meeting summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// The extracted rows.
    pub rows: ExportRows,
    /// The artifact-name pieces.
    pub file_name_parts: FileNameParts,
}

impl CsvExport {
    /// Renders the rows as a CSV document with header row and leading BOM.
    pub fn to_csv(&self) -> String {
        self.rows.to_csv()
    }

    /// Returns the artifact file name.
    pub fn file_name(&self) -> String {
        self.file_name_parts.file_name()
    }
}

/// Configuration options for the exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Product prefix used in artifact names.
    pub product: String,
    /// Sentinel substituted for reflection authorship.
    pub anonymous_author: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            product: "Recap".to_string(),
            anonymous_author: "anonymous".to_string(),
        }
    }
}

/// Exports meeting summaries as ordered row sets.
///
/// The transform is synchronous and pure: it walks the summary graph once,
/// in source order, and holds no shared mutable state.
pub struct SummaryExporter {
    options: ExportOptions,
    flattener: Box<dyn FlattenRichText>,
}

impl SummaryExporter {
    /// Creates a new exporter with the given options.
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            flattener: Box::new(DocFlattener),
        }
    }

    /// Creates a new exporter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ExportOptions::default())
    }

    /// Builder method to replace the rich-text flattener.
    pub fn with_flattener(mut self, flattener: Box<dyn FlattenRichText>) -> Self {
        self.flattener = flattener;
        self
    }

    /// Exports a meeting summary.
    ///
    /// Returns `None` for an unrecognized meeting kind: nothing observable
    /// happens, mirroring the tolerant behavior of the triggering surface.
    pub fn export(&self, summary: &MeetingSummary) -> Option<CsvExport> {
        let rows = match &summary.kind {
            MeetingKind::Action(meeting) => ExportRows::Action(self.action_rows(meeting)),
            MeetingKind::Retrospective(meeting) => {
                ExportRows::Retrospective(self.retro_rows(meeting))
            }
            MeetingKind::Unknown => {
                tracing::warn!(team = %summary.team_name, "unknown meeting kind; nothing to export");
                return None;
            }
        };

        let label = summary
            .kind
            .label()
            .expect("known meeting kind has a label");
        tracing::debug!(rows = rows.len(), label, "extracted export rows");

        Some(CsvExport {
            rows,
            file_name_parts: FileNameParts {
                product: self.options.product.clone(),
                meeting_label: label.to_string(),
                team_name: summary.team_name.clone(),
                end_date: summary.ended_at.date_naive(),
            },
        })
    }

    /// Extracts rows from an action meeting.
    ///
    /// Member task rows come first, in roster order; a taskless member
    /// still emits one placeholder row so attendance stays visible. Agenda
    /// thread rows follow, comments only, each trailed by its replies.
    fn action_rows(&self, meeting: &ActionMeeting) -> Vec<ActionRow> {
        let mut rows = Vec::new();

        for member in &meeting.meeting_members {
            let status = if member.is_checked_in {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            if member.tasks.is_empty() {
                rows.push(ActionRow {
                    author: member.preferred_name.clone(),
                    status,
                    agenda_item: String::new(),
                    kind: ActionRowKind::Task,
                    created_at: String::new(),
                    reply_to: String::new(),
                    content: String::new(),
                });
                continue;
            }
            for task in &member.tasks {
                rows.push(ActionRow {
                    author: member.preferred_name.clone(),
                    status,
                    agenda_item: task.agenda_item.clone().unwrap_or_default(),
                    kind: ActionRowKind::Task,
                    created_at: timestamp(task.created_at),
                    reply_to: String::new(),
                    content: self.flattener.flatten(&task.content),
                });
            }
        }

        for item in &meeting.agenda_items {
            for node in &item.thread {
                // Threads interleave task entries; only comments export.
                if node.kind != DiscussionKind::Comment {
                    continue;
                }
                let comment_text = self.flattener.flatten(&node.content);
                rows.push(ActionRow {
                    author: node.author.clone(),
                    status: AttendanceStatus::Present,
                    agenda_item: item.content.clone(),
                    kind: ActionRowKind::Comment,
                    created_at: timestamp(node.created_at),
                    reply_to: String::new(),
                    content: comment_text.clone(),
                });
                for reply in &node.replies {
                    rows.push(ActionRow {
                        author: reply.author.clone(),
                        status: AttendanceStatus::Present,
                        agenda_item: item.content.clone(),
                        kind: ActionRowKind::Reply,
                        created_at: timestamp(reply.created_at),
                        reply_to: comment_text.clone(),
                        content: self.flattener.flatten(&reply.content),
                    });
                }
            }
        }

        rows
    }

    /// Extracts rows from a retrospective meeting.
    ///
    /// Rows group by reflection group, in stage order; within a group:
    /// tasks, then reflections (author anonymized), then the thread with
    /// replies trailing their comment.
    fn retro_rows(&self, meeting: &RetrospectiveMeeting) -> Vec<RetroRow> {
        let mut rows = Vec::new();

        for group in &meeting.reflection_groups {
            for task in &group.tasks {
                rows.push(RetroRow {
                    title: group.title.clone(),
                    author: task.author.clone(),
                    votes: group.vote_count,
                    kind: RetroRowKind::Task,
                    created_at: timestamp(task.created_at),
                    reply_to: String::new(),
                    prompt: String::new(),
                    content: self.flattener.flatten(&task.content),
                });
            }
            for reflection in &group.reflections {
                rows.push(RetroRow {
                    title: group.title.clone(),
                    author: self.options.anonymous_author.clone(),
                    votes: group.vote_count,
                    kind: RetroRowKind::Reflection,
                    created_at: timestamp(reflection.created_at),
                    reply_to: String::new(),
                    prompt: reflection.prompt.clone(),
                    content: self.flattener.flatten(&reflection.content),
                });
            }
            for node in &group.thread {
                let comment_text = self.flattener.flatten(&node.content);
                rows.push(RetroRow {
                    title: group.title.clone(),
                    author: node.author.clone(),
                    votes: group.vote_count,
                    kind: RetroRowKind::Comment,
                    created_at: timestamp(node.created_at),
                    reply_to: String::new(),
                    prompt: String::new(),
                    content: comment_text.clone(),
                });
                for reply in &node.replies {
                    rows.push(RetroRow {
                        title: group.title.clone(),
                        author: reply.author.clone(),
                        votes: group.vote_count,
                        kind: RetroRowKind::Reply,
                        created_at: timestamp(reply.created_at),
                        reply_to: comment_text.clone(),
                        prompt: String::new(),
                        content: self.flattener.flatten(&reply.content),
                    });
                }
            }
        }

        rows
    }
}

/// Renders a creation timestamp the way the data layer emits them.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
