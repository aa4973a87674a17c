//! Core types: summary graph, rich text flattening, export rows, CSV rendering

pub mod artifact;
pub mod csv;
pub mod export;
pub mod richtext;
pub mod summary;
pub mod tracing;

pub use artifact::{ArtifactError, CsvArtifact};
pub use csv::CsvRecord;
pub use export::{
    ActionRow, ActionRowKind, AttendanceStatus, CsvExport, ExportOptions, ExportRows,
    FileNameParts, RetroRow, RetroRowKind, SummaryExporter,
};
pub use richtext::{DocFlattener, FlattenRichText};
pub use summary::{
    ActionMeeting, AgendaItem, DiscussionKind, DiscussionNode, DiscussionReply, GroupTask,
    MeetingKind, MeetingMember, MeetingSummary, MemberTask, Reflection, ReflectionGroup,
    RetrospectiveMeeting,
};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
