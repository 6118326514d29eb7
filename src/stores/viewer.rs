//! Fetch/display state for the viewer page
//!
//! `ViewerState` holds everything the page renders. Every fetch is started by
//! a `begin_*` call that clears the affected slots and hands out a ticket; the
//! matching `finish_*` call only applies a result whose ticket is still the
//! newest one, so a slow response can never overwrite a newer one.
//!
//! The async functions at the bottom drive a whole user action against a
//! `MediaSource` and are what the components spawn.

use crate::services::errors::FetchError;
use crate::services::media_api::MediaSource;
use crate::services::models::{HighlightItem, PostItem, ProfileData, Tab, TabContent};
use crate::stores::state_cell::StateCell;
use crate::utils::username::{normalize_username, UsernameInput};

pub const PRIVATE_ACCOUNT_MESSAGE: &str = "Can not fetch data from a Private Account ";
pub const HIGHLIGHT_FAILURE_MESSAGE: &str = "Failed to fetch highlights. Please try again later.";
pub const INVALID_USERNAME_MESSAGE: &str = "Please enter a valid username.";

pub fn empty_message(tab: Tab) -> String {
    format!("No {} found.", tab)
}

/// Message shown when fetching a tab fails
pub fn fetch_failure_message(tab: Tab, error: &FetchError) -> String {
    if error.is_not_found() {
        PRIVATE_ACCOUNT_MESSAGE.to_string()
    } else {
        format!("Failed to fetch {}. Please try again later.", tab)
    }
}

/// Permission to write the media slots for one tab fetch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaTicket {
    generation: u64,
    pub tab: Tab,
    pub username: String,
}

/// Permission to write the media slot with one highlight's frames
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightTicket {
    generation: u64,
    pub highlight_id: String,
}

/// Permission to write the profile header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileTicket {
    generation: u64,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input, nothing changed
    Ignored,
    /// Input rejected, error message set
    Invalid,
    Started {
        profile: ProfileTicket,
        media: MediaTicket,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
    /// Last username that was submitted; tab switches reuse it
    pub username: Option<String>,
    pub tab: Tab,
    /// Media items of the current tab, or the frames of an opened highlight
    pub stories: Vec<PostItem>,
    pub highlights: Vec<HighlightItem>,
    pub error: Option<String>,
    pub loading: bool,
    pub profile: Option<ProfileData>,
    pub profile_loading: bool,
    media_generation: u64,
    profile_generation: u64,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabs and profile header are shown once a username has been submitted
    pub fn has_session(&self) -> bool {
        self.username.is_some()
    }

    pub fn shows_highlights(&self) -> bool {
        self.tab == Tab::Highlights && !self.highlights.is_empty()
    }

    /// Start a new search. Clears every slot, including the profile.
    pub fn begin_submit(&mut self, input: &str) -> SubmitOutcome {
        let username = match normalize_username(input) {
            UsernameInput::Empty => return SubmitOutcome::Ignored,
            UsernameInput::Invalid(_) => {
                self.error = Some(INVALID_USERNAME_MESSAGE.to_string());
                return SubmitOutcome::Invalid;
            }
            UsernameInput::Valid(username) => username,
        };

        self.username = Some(username.clone());
        self.profile = None;
        self.profile_loading = true;
        self.profile_generation += 1;

        let media = self.start_media_fetch(username.clone());
        let profile = ProfileTicket {
            generation: self.profile_generation,
            username,
        };

        SubmitOutcome::Started { profile, media }
    }

    /// Switch tab. Returns a ticket when the new tab has to be fetched.
    pub fn begin_tab(&mut self, tab: Tab) -> Option<MediaTicket> {
        if self.tab == tab {
            return None;
        }
        self.tab = tab;

        let username = self.username.clone()?;
        Some(self.start_media_fetch(username))
    }

    /// Open a highlight; its frames replace the media slot, the strip stays.
    pub fn begin_highlight(&mut self, highlight_id: &str) -> Option<HighlightTicket> {
        if highlight_id.is_empty() {
            return None;
        }

        self.media_generation += 1;
        self.error = None;
        self.stories.clear();
        self.loading = true;

        Some(HighlightTicket {
            generation: self.media_generation,
            highlight_id: highlight_id.to_string(),
        })
    }

    fn start_media_fetch(&mut self, username: String) -> MediaTicket {
        self.media_generation += 1;
        self.error = None;
        self.stories.clear();
        self.highlights.clear();
        self.loading = true;

        MediaTicket {
            generation: self.media_generation,
            tab: self.tab,
            username,
        }
    }

    pub fn is_current(&self, ticket: &MediaTicket) -> bool {
        ticket.generation == self.media_generation
    }

    /// Apply a tab fetch result. Returns false if the ticket was superseded.
    pub fn finish_tab(&mut self, ticket: &MediaTicket, result: Result<TabContent, FetchError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;

        match result {
            Ok(content) if content.is_empty() => {
                self.error = Some(empty_message(ticket.tab));
            }
            Ok(TabContent::Highlights(items)) => self.highlights = items,
            Ok(TabContent::Media(items)) => self.stories = items,
            Err(e) => self.error = Some(fetch_failure_message(ticket.tab, &e)),
        }
        true
    }

    pub fn finish_highlight(
        &mut self,
        ticket: &HighlightTicket,
        result: Result<Vec<PostItem>, FetchError>,
    ) -> bool {
        if ticket.generation != self.media_generation {
            return false;
        }
        self.loading = false;

        match result {
            Ok(items) => self.stories = items,
            Err(_) => self.error = Some(HIGHLIGHT_FAILURE_MESSAGE.to_string()),
        }
        true
    }

    /// Profile failures leave the header empty and are never shown as errors
    pub fn finish_profile(
        &mut self,
        ticket: &ProfileTicket,
        result: Result<ProfileData, FetchError>,
    ) -> bool {
        if ticket.generation != self.profile_generation {
            return false;
        }
        self.profile_loading = false;
        self.profile = result.ok();
        true
    }
}

/// Submit the search box: profile first, then the selected tab
pub async fn submit_username<C>(cell: C, source: &dyn MediaSource, input: String)
where
    C: StateCell<ViewerState>,
{
    let (profile_ticket, media_ticket) = match cell.update(|state| state.begin_submit(&input)) {
        SubmitOutcome::Started { profile, media } => (profile, media),
        SubmitOutcome::Ignored => return,
        SubmitOutcome::Invalid => {
            log::info!("Rejected username input {:?}", input);
            return;
        }
    };

    log::info!("Loading profile for {}", profile_ticket.username);
    let profile = source.fetch_profile(&profile_ticket.username).await;
    if let Err(e) = &profile {
        log::warn!("Failed to fetch profile for {}: {}", profile_ticket.username, e);
    }
    if !cell.update(|state| state.finish_profile(&profile_ticket, profile)) {
        log::debug!("Dropped stale profile for {}", profile_ticket.username);
    }

    // A tab switch during the profile fetch already loaded the newer tab
    if !cell.inspect(|state| state.is_current(&media_ticket)) {
        log::debug!("Skipping superseded {} fetch", media_ticket.tab);
        return;
    }

    load_tab(cell, source, media_ticket).await;
}

/// Select a tab and, if a username is known, fetch it
pub async fn select_tab<C>(cell: C, source: &dyn MediaSource, tab: Tab)
where
    C: StateCell<ViewerState>,
{
    if let Some(ticket) = cell.update(|state| state.begin_tab(tab)) {
        load_tab(cell, source, ticket).await;
    }
}

/// Load a highlight's frames into the media slot
pub async fn open_highlight<C>(cell: C, source: &dyn MediaSource, highlight_id: String)
where
    C: StateCell<ViewerState>,
{
    let Some(ticket) = cell.update(|state| state.begin_highlight(&highlight_id)) else {
        return;
    };

    log::info!("Loading highlight {}", ticket.highlight_id);
    let result = source.fetch_highlight(&ticket.highlight_id).await;
    match &result {
        Ok(items) => log::info!("Highlight {} has {} items", ticket.highlight_id, items.len()),
        Err(e) => log::error!("Failed to fetch highlight {}: {}", ticket.highlight_id, e),
    }

    if !cell.update(|state| state.finish_highlight(&ticket, result)) {
        log::debug!("Dropped stale highlight {}", ticket.highlight_id);
    }
}

async fn load_tab<C>(cell: C, source: &dyn MediaSource, ticket: MediaTicket)
where
    C: StateCell<ViewerState>,
{
    log::info!("Loading {} for {}", ticket.tab, ticket.username);
    let result = source.fetch_tab(ticket.tab, &ticket.username).await;
    match &result {
        Ok(content) => log::info!("Fetched {} {} for {}", content.len(), ticket.tab, ticket.username),
        Err(e) => log::error!("Failed to fetch {} for {}: {}", ticket.tab, ticket.username, e),
    }

    if !cell.update(|state| state.finish_tab(&ticket, result)) {
        log::debug!("Dropped stale {} response for {}", ticket.tab, ticket.username);
    }
}
