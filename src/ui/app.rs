use crate::config::Config;
use crate::model::{Activity, RollInput, RollState, Student};
use crate::roster::{FilterPatch, SortConfig, SortPatch, StateFilter, SummaryKind};
use crate::ui::activity::{
    page_size as activity_page_size, ActivityDialogState, ActivityIntent, ActivityReducer,
    MAX_VISIBLE_ROWS,
};
use crate::ui::mvi::Reducer;
use crate::ui::roster::{RosterIntent, RosterReducer, RosterState};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupKind {
    Activity,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Board,
    Search,
    Popup(PopupKind),
}

/// Progress of the roster fetch.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Work handed to the data-source worker.
#[derive(Debug)]
pub enum UiCommand {
    LoadStudents,
    SaveRoll(RollInput),
    LoadActivities,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Roster store (MVI pattern).
    roster: RosterState,
    /// State of the activity dialog (MVI pattern).
    activity_dialog: ActivityDialogState,
    load_state: LoadState,
    selected: usize,
    /// Activity rows that fit on the current screen.
    activity_page: usize,
    ticks: u64,
    command_sender: Option<UiCommandSender>,
    status_message: Option<String>,
    last_error: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Board,
            roster: RosterState::with_sort(SortConfig::from(&config.roster)),
            activity_dialog: ActivityDialogState::default(),
            load_state: LoadState::default(),
            selected: 0,
            activity_page: MAX_VISIBLE_ROWS,
            ticks: 0,
            command_sender: None,
            status_message: None,
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn popup_kind(&self) -> Option<PopupKind> {
        match self.focus {
            Focus::Popup(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn on_resize(&mut self, rows: u16) {
        self.activity_page = activity_page_size(rows);
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    // ========================================================================
    // Roster store (MVI pattern)
    // ========================================================================

    /// Dispatch an intent to the roster reducer and keep the cursor on the list.
    pub fn dispatch_roster(&mut self, intent: RosterIntent) {
        tracing::debug!(?intent, "roster intent");
        dispatch_mvi!(self, roster, RosterReducer, intent);
        self.clamp_selection();
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_student(&self) -> Option<&Student> {
        self.roster.view().get(self.selected)
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.roster.view().len();
        if len == 0 {
            self.selected = 0;
            return;
        }

        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn request_students(&mut self) {
        if self.send_command(UiCommand::LoadStudents) {
            self.load_state = LoadState::Loading;
        } else {
            self.load_state = LoadState::Failed("no data source".to_string());
        }
    }

    pub fn on_students_loaded(&mut self, students: Vec<Student>) {
        tracing::info!(count = students.len(), "roster loaded");
        self.load_state = LoadState::Loaded;
        self.dispatch_roster(RosterIntent::Load { students });
    }

    pub fn on_students_failed(&mut self, message: String) {
        tracing::warn!(%message, "roster fetch failed");
        self.load_state = LoadState::Failed(message);
    }

    pub fn toggle_sort_key(&mut self) {
        let by_first_name = !self.roster.sort().by_first_name;
        self.dispatch_roster(RosterIntent::Sort(SortPatch::by_first_name(by_first_name)));
    }

    pub fn toggle_sort_direction(&mut self) {
        let ascending = !self.roster.sort().ascending;
        self.dispatch_roster(RosterIntent::Sort(SortPatch::ascending(ascending)));
    }

    pub fn begin_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn end_search(&mut self) {
        self.focus = Focus::Board;
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut pattern = self.roster.filter().name_pattern.clone();
        pattern.push(ch);
        self.dispatch_roster(RosterIntent::Search(FilterPatch::name(pattern)));
    }

    pub fn pop_search_char(&mut self) {
        let mut pattern = self.roster.filter().name_pattern.clone();
        if pattern.pop().is_some() {
            self.dispatch_roster(RosterIntent::Search(FilterPatch::name(pattern)));
        }
    }

    pub fn clear_search(&mut self) {
        self.dispatch_roster(RosterIntent::Search(FilterPatch {
            name_pattern: Some(String::new()),
            attendance_state: Some(StateFilter::All),
        }));
    }

    /// Clicking a summary bucket narrows the board to that attendance state.
    pub fn filter_by_bucket(&mut self, kind: SummaryKind) {
        self.dispatch_roster(RosterIntent::Search(FilterPatch::attendance(kind.filter())));
    }

    pub fn start_roll(&mut self) {
        self.status_message = None;
        self.dispatch_roster(RosterIntent::StartRoll);
    }

    pub fn exit_roll(&mut self) {
        self.dispatch_roster(RosterIntent::EndRoll { completed: false });
    }

    /// Ends the session, folds its marks into the roster and submits the roll.
    pub fn complete_roll(&mut self) {
        if !self.roster.is_roll_active() {
            return;
        }
        let input = self.roster.roll_input();
        self.dispatch_roster(RosterIntent::EndRoll { completed: true });
        if self.send_command(UiCommand::SaveRoll(input)) {
            self.status_message = Some("Saving roll…".to_string());
        } else if self.command_sender.is_none() {
            self.last_error = Some("Saving roll failed: no data source".to_string());
        }
    }

    pub fn mark_selected(&mut self, roll_state: RollState) {
        if !self.roster.is_roll_active() {
            return;
        }
        let Some(id) = self.selected_student().map(|s| s.id) else {
            return;
        };
        self.dispatch_roster(RosterIntent::Mark { id, roll_state });
    }

    pub fn on_roll_saved(&mut self) {
        tracing::info!("roll saved");
        self.status_message = Some("Roll saved".to_string());
        if self.activity_dialog.is_visible() {
            self.send_command(UiCommand::LoadActivities);
        }
    }

    pub fn on_roll_save_failed(&mut self, message: String) {
        tracing::warn!(%message, "saving roll failed");
        self.status_message = None;
        self.last_error = Some(format!("Saving roll failed: {message}"));
    }

    // ========================================================================
    // Activity dialog (MVI pattern)
    // ========================================================================

    pub fn activity_dialog(&self) -> &ActivityDialogState {
        &self.activity_dialog
    }

    pub fn dispatch_activity(&mut self, intent: ActivityIntent) {
        dispatch_mvi!(self, activity_dialog, ActivityReducer, intent);
    }

    pub fn open_activity_dialog(&mut self) {
        self.dispatch_activity(ActivityIntent::Open);
        self.focus = Focus::Popup(PopupKind::Activity);
        if !self.send_command(UiCommand::LoadActivities) {
            self.dispatch_activity(ActivityIntent::Failed {
                message: "no data source".to_string(),
            });
        }
    }

    pub fn scroll_activity_up(&mut self) {
        self.dispatch_activity(ActivityIntent::ScrollUp);
    }

    pub fn scroll_activity_down(&mut self) {
        let page_size = self.activity_page;
        self.dispatch_activity(ActivityIntent::ScrollDown { page_size });
    }

    pub fn close_activity_dialog(&mut self) {
        self.dispatch_activity(ActivityIntent::Close);
        self.focus = Focus::Board;
    }

    pub fn on_activities_loaded(&mut self, activities: Vec<Activity>) {
        self.dispatch_activity(ActivityIntent::Loaded { activities });
    }

    pub fn on_activities_failed(&mut self, message: String) {
        tracing::warn!(%message, "activity fetch failed");
        self.dispatch_activity(ActivityIntent::Failed { message });
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                self.last_error = Some(format!("Request failed: {}", err));
                false
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.roster.view().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
