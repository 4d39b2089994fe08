//! Per-session state and the transition applied for each user action.
//!
//! [`apply`] is pure over its arguments: it touches only the table and the
//! session it is lent, and reports whether the table changed so the caller
//! can persist it.

use chrono::NaiveDate;

use crate::model::{NewRecord, RecordEdit, RecordId, Table};

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create(NewRecord),
    Search(String),
    Select(RecordId),
    Update { id: RecordId, edit: RecordEdit },
    Delete(RecordId),
    DismissNotice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Feedback shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Outcome of one [`apply`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    /// The table changed and must be written back.
    pub mutated: bool,
}

/// Everything one user session remembers between interactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub query: String,
    pub selected: Option<RecordId>,
    /// Editable copy of the selected record's status, progress and notes.
    pub edit: RecordEdit,
    /// Contents of the creation form.
    pub create: NewRecord,
    pub notice: Option<Notice>,
    today: NaiveDate,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            query: String::new(),
            selected: None,
            edit: RecordEdit::default(),
            create: NewRecord::starting(today),
            notice: None,
            today,
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.edit = RecordEdit::default();
    }
}

/// Apply `action` to the lent table and session.
pub fn apply(table: &mut Table, session: &mut Session, action: Action) -> Transition {
    match action {
        Action::Create(form) => {
            let name = form.name.clone();
            let id = table.create(form);
            session.create = NewRecord::starting(session.today);
            session.notice = Some(Notice::success(format!("Project '{name}' added as {id}.")));
            Transition { mutated: true }
        }
        Action::Search(query) => {
            let still_visible = session
                .selected
                .as_ref()
                .is_some_and(|id| table.search(&query).iter().any(|r| &r.id == id));
            if !still_visible {
                session.clear_selection();
            }
            session.query = query;
            Transition::default()
        }
        Action::Select(id) => {
            match table.get(&id) {
                Some(record) => {
                    session.edit = RecordEdit::of(record);
                    session.selected = Some(id);
                }
                None => stale(session, &id),
            }
            Transition::default()
        }
        Action::Update { id, edit } => {
            if table.update(&id, edit.clone()) {
                let name = table.get(&id).map(|r| r.name.clone()).unwrap_or_default();
                session.edit = edit;
                session.selected = Some(id);
                session.notice = Some(Notice::success(format!("Project '{name}' updated.")));
                Transition { mutated: true }
            } else {
                stale(session, &id);
                Transition::default()
            }
        }
        Action::Delete(id) => {
            match table.get(&id).map(|r| r.name.clone()) {
                Some(name) => {
                    table.remove(&id);
                    session.clear_selection();
                    session.notice = Some(Notice::warning(format!("Project '{name}' deleted.")));
                    Transition { mutated: true }
                }
                None => {
                    stale(session, &id);
                    Transition::default()
                }
            }
        }
        Action::DismissNotice => {
            session.notice = None;
            Transition::default()
        }
    }
}

/// The selection points at a record that is no longer on file.
fn stale(session: &mut Session, id: &RecordId) {
    tracing::warn!(%id, "action on a record that no longer exists");
    session.clear_selection();
    session.notice = Some(Notice::warning(format!("{id} no longer exists; nothing was changed.")));
}
