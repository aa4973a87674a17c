//! Meeting summary graph types.
//!
//! This module provides the input side of the export pipeline:
//! - [`MeetingSummary`]: the fetched summary of a completed meeting
//! - [`MeetingKind`]: the tagged body of the summary (action or retrospective)
//! - [`DiscussionNode`]: one entry of a discussion thread, with its replies
//!
//! The graph is read-only once fetched; the exporter walks it in source
//! order and never mutates it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The summary of a completed meeting, as fetched from the data layer.
///
/// Shared fields live on the struct; everything type-specific hangs off
/// [`MeetingKind`], discriminated by the `meetingType` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    /// Name of the team the meeting belongs to.
    pub team_name: String,
    /// When the meeting ended. Drives the artifact date stamp.
    pub ended_at: DateTime<Utc>,
    /// The type-specific body of the summary.
    #[serde(flatten)]
    pub kind: MeetingKind,
}

impl MeetingSummary {
    /// Creates an action meeting summary.
    pub fn action(
        team_name: impl Into<String>,
        ended_at: DateTime<Utc>,
        meeting: ActionMeeting,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            ended_at,
            kind: MeetingKind::Action(meeting),
        }
    }

    /// Creates a retrospective meeting summary.
    pub fn retrospective(
        team_name: impl Into<String>,
        ended_at: DateTime<Utc>,
        meeting: RetrospectiveMeeting,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            ended_at,
            kind: MeetingKind::Retrospective(meeting),
        }
    }
}

/// The type-specific body of a meeting summary.
///
/// Unrecognized `meetingType` tags deserialize to [`MeetingKind::Unknown`]
/// instead of failing, so a summary fetched from a newer data layer stays
/// readable; the exporter turns that variant into an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "meetingType", rename_all = "lowercase")]
pub enum MeetingKind {
    /// An action meeting: members with tasks, agenda items with threads.
    Action(ActionMeeting),
    /// A retrospective: reflection groups with tasks, reflections, threads.
    Retrospective(RetrospectiveMeeting),
    /// Any meeting type this version does not know how to export.
    #[serde(other)]
    Unknown,
}

impl MeetingKind {
    /// Returns the capitalized meeting type label used in artifact names.
    ///
    /// `None` for [`MeetingKind::Unknown`].
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Action(_) => Some("Action"),
            Self::Retrospective(_) => Some("Retrospective"),
            Self::Unknown => None,
        }
    }
}

/// The body of an action meeting summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionMeeting {
    /// Meeting members in roster order.
    pub meeting_members: Vec<MeetingMember>,
    /// Agenda items in discussion order.
    pub agenda_items: Vec<AgendaItem>,
}

/// One member of an action meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingMember {
    /// Display name of the member.
    pub preferred_name: String,
    /// Whether the member checked in to the meeting.
    pub is_checked_in: bool,
    /// Tasks the member created during the meeting.
    #[serde(default)]
    pub tasks: Vec<MemberTask>,
}

impl MeetingMember {
    /// Creates a member with no tasks.
    pub fn new(preferred_name: impl Into<String>, is_checked_in: bool) -> Self {
        Self {
            preferred_name: preferred_name.into(),
            is_checked_in,
            tasks: Vec::new(),
        }
    }

    /// Builder method to add a task.
    pub fn with_task(mut self, task: MemberTask) -> Self {
        self.tasks.push(task);
        self
    }
}

/// A task created by a meeting member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTask {
    /// Task body as a serialized rich-text document.
    pub content: String,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// Plain text of the agenda item the task was filed under, if any.
    #[serde(default)]
    pub agenda_item: Option<String>,
}

/// An agenda item and its discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    /// Plain text of the agenda item.
    pub content: String,
    /// The discussion thread attached to the item.
    #[serde(default)]
    pub thread: Vec<DiscussionNode>,
}

/// The kind of a discussion thread node.
///
/// Threads interleave comments with task entries; only comments are
/// exportable discussion content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionKind {
    /// A comment written in the discussion.
    Comment,
    /// A task filed from within the discussion.
    Task,
}

/// One top-level entry of a discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionNode {
    /// What kind of entry this is.
    pub kind: DiscussionKind,
    /// Display name of the entry's author.
    pub author: String,
    /// Entry body as a serialized rich-text document.
    pub content: String,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// Replies to this entry, in posting order.
    #[serde(default)]
    pub replies: Vec<DiscussionReply>,
}

impl DiscussionNode {
    /// Creates a comment node with no replies.
    pub fn comment(
        author: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind: DiscussionKind::Comment,
            author: author.into(),
            content: content.into(),
            created_at,
            replies: Vec::new(),
        }
    }

    /// Builder method to add a reply.
    pub fn with_reply(mut self, reply: DiscussionReply) -> Self {
        self.replies.push(reply);
        self
    }
}

/// A reply to a discussion thread entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionReply {
    /// Display name of the reply's author.
    pub author: String,
    /// Reply body as a serialized rich-text document.
    pub content: String,
    /// When the reply was created.
    pub created_at: DateTime<Utc>,
}

/// The body of a retrospective meeting summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrospectiveMeeting {
    /// Reflection groups in stage order.
    pub reflection_groups: Vec<ReflectionGroup>,
}

/// A group of reflections, with its tasks and discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionGroup {
    /// Title of the group.
    pub title: String,
    /// Number of votes the group received.
    pub vote_count: u32,
    /// Tasks created for this group.
    #[serde(default)]
    pub tasks: Vec<GroupTask>,
    /// Reflections collected into this group.
    #[serde(default)]
    pub reflections: Vec<Reflection>,
    /// The discussion thread attached to the group.
    #[serde(default)]
    pub thread: Vec<DiscussionNode>,
}

/// A task created for a reflection group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTask {
    /// Display name of the task's creator.
    pub author: String,
    /// Task body as a serialized rich-text document.
    pub content: String,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

/// A single reflection within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    /// Reflection body as a serialized rich-text document.
    pub content: String,
    /// When the reflection was created.
    pub created_at: DateTime<Utc>,
    /// The prompt the reflection answered.
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn sample_action() -> MeetingSummary {
        MeetingSummary::action(
            "Acme",
            utc(2021, 3, 7, 18, 30, 0),
            ActionMeeting {
                meeting_members: vec![
                    MeetingMember::new("Taya", true).with_task(MemberTask {
                        content: r#"{"blocks":[{"text":"Ship it"}]}"#.to_string(),
                        created_at: utc(2021, 3, 7, 18, 0, 0),
                        agenda_item: Some("Release planning".to_string()),
                    }),
                ],
                agenda_items: vec![AgendaItem {
                    content: "Release planning".to_string(),
                    thread: vec![DiscussionNode::comment(
                        "Matt",
                        r#"{"blocks":[{"text":"Looks good"}]}"#,
                        utc(2021, 3, 7, 18, 5, 0),
                    )],
                }],
            },
        )
    }

    mod meeting_kind {
        use super::*;

        #[test]
        fn labels() {
            assert_eq!(sample_action().kind.label(), Some("Action"));
            assert_eq!(MeetingKind::Unknown.label(), None);
            let retro = MeetingKind::Retrospective(RetrospectiveMeeting {
                reflection_groups: vec![],
            });
            assert_eq!(retro.label(), Some("Retrospective"));
        }

        #[test]
        fn unknown_tag_is_tolerated() {
            let json = r#"{
                "meetingType": "poker",
                "teamName": "Acme",
                "endedAt": "2021-03-07T18:30:00Z"
            }"#;
            let summary: MeetingSummary = serde_json::from_str(json).unwrap();
            assert_eq!(summary.kind, MeetingKind::Unknown);
            assert_eq!(summary.team_name, "Acme");
        }
    }

    mod deserialization {
        use super::*;

        #[test]
        fn action_from_camel_case_json() {
            let json = r#"{
                "meetingType": "action",
                "teamName": "Acme",
                "endedAt": "2021-03-07T18:30:00Z",
                "meetingMembers": [
                    {
                        "preferredName": "Taya",
                        "isCheckedIn": true,
                        "tasks": [
                            {
                                "content": "{\"blocks\":[{\"text\":\"Ship it\"}]}",
                                "createdAt": "2021-03-07T18:00:00Z",
                                "agendaItem": "Release planning"
                            }
                        ]
                    }
                ],
                "agendaItems": [
                    {
                        "content": "Release planning",
                        "thread": [
                            {
                                "kind": "comment",
                                "author": "Matt",
                                "content": "{\"blocks\":[{\"text\":\"Looks good\"}]}",
                                "createdAt": "2021-03-07T18:05:00Z"
                            }
                        ]
                    }
                ]
            }"#;
            let summary: MeetingSummary = serde_json::from_str(json).unwrap();
            assert_eq!(summary, sample_action());
        }

        #[test]
        fn member_tasks_default_to_empty() {
            let json = r#"{"preferredName": "Jordan", "isCheckedIn": false}"#;
            let member: MeetingMember = serde_json::from_str(json).unwrap();
            assert!(member.tasks.is_empty());
            assert!(!member.is_checked_in);
        }

        #[test]
        fn retrospective_from_json() {
            let json = r#"{
                "meetingType": "retrospective",
                "teamName": "Acme",
                "endedAt": "2021-03-07T18:30:00Z",
                "reflectionGroups": [
                    {
                        "title": "Start",
                        "voteCount": 3,
                        "reflections": [
                            {
                                "content": "{\"blocks\":[{\"text\":\"Pair more\"}]}",
                                "createdAt": "2021-03-07T18:10:00Z",
                                "prompt": "What should we start doing?"
                            }
                        ]
                    }
                ]
            }"#;
            let summary: MeetingSummary = serde_json::from_str(json).unwrap();
            let MeetingKind::Retrospective(ref retro) = summary.kind else {
                panic!("expected retrospective");
            };
            assert_eq!(retro.reflection_groups.len(), 1);
            let group = &retro.reflection_groups[0];
            assert_eq!(group.title, "Start");
            assert_eq!(group.vote_count, 3);
            assert!(group.tasks.is_empty());
            assert!(group.thread.is_empty());
        }
    }

    mod serde_roundtrip {
        use super::*;

        #[test]
        fn action_roundtrip() {
            let summary = sample_action();
            let json = serde_json::to_string(&summary).unwrap();
            let parsed: MeetingSummary = serde_json::from_str(&json).unwrap();
            assert_eq!(summary, parsed);
        }

        #[test]
        fn retrospective_roundtrip() {
            let summary = MeetingSummary::retrospective(
                "Acme",
                utc(2021, 3, 7, 18, 30, 0),
                RetrospectiveMeeting {
                    reflection_groups: vec![ReflectionGroup {
                        title: "Start".to_string(),
                        vote_count: 2,
                        tasks: vec![GroupTask {
                            author: "Taya".to_string(),
                            content: r#"{"blocks":[{"text":"Book a room"}]}"#.to_string(),
                            created_at: utc(2021, 3, 7, 18, 12, 0),
                        }],
                        reflections: vec![],
                        thread: vec![],
                    }],
                },
            );
            let json = serde_json::to_string(&summary).unwrap();
            let parsed: MeetingSummary = serde_json::from_str(&json).unwrap();
            assert_eq!(summary, parsed);
        }
    }
}
