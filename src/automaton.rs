use std::time::Duration;

use chrono::NaiveDate;

use crate::driver::{PageDriver, SelectChoice};
use crate::menu::{Meal, MealMenu, MenuSnapshot};
use crate::scrape::parse_meal;
use crate::venue::Venue;
use crate::CancelFlag;

/// Where the single interactive session currently stands. Only one
/// (date, meal) selection can be live at a time because the selector control
/// is shared, stateful UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle,
    SelectorOpen,
    DateChosen,
    MealChosen,
    ContentStable,
    Done,
}

/// The next interaction to perform against the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    OpenSelector,
    ChooseDate,
    ChooseMeal,
    Commit,
    Finish,
}

/// Pure transition function: which interaction comes next, given the state
/// and the remaining work.
///
/// `date_active` means the date control already holds the target date of the
/// current pair, so a reopen only changes the meal; the date is never
/// re-chosen. `work_left` means at least one (date, meal) pair is still
/// unvisited.
#[must_use]
pub fn next_action(state: NavState, date_active: bool, work_left: bool) -> NavAction {
    match state {
        NavState::Idle => NavAction::OpenSelector,
        NavState::SelectorOpen => {
            if date_active {
                NavAction::ChooseMeal
            } else {
                NavAction::ChooseDate
            }
        }
        NavState::DateChosen => NavAction::ChooseMeal,
        NavState::MealChosen => NavAction::Commit,
        NavState::ContentStable => {
            if work_left {
                NavAction::OpenSelector
            } else {
                NavAction::Finish
            }
        }
        NavState::Done => NavAction::Finish,
    }
}

/// One eligible date of the work plan: the raw option value to select, the
/// adjusted service date to key the output with, and the meals the calendar
/// allows.
#[derive(Debug, Clone)]
struct DateTask {
    raw_value: String,
    date: NaiveDate,
    meals: Vec<Meal>,
}

/// Drives one venue's date/meal selector through every eligible pair,
/// parsing the rendered content after each stable render.
pub struct Navigator<'a> {
    driver: &'a dyn PageDriver,
    venue: &'a Venue,
    cancel: CancelFlag,
    settle_timeout: Duration,
}

impl<'a> Navigator<'a> {
    pub fn new(driver: &'a dyn PageDriver, venue: &'a Venue) -> Self {
        Self {
            driver,
            venue,
            cancel: CancelFlag::new(),
            settle_timeout: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn with_settle_timeout(mut self, timeout: Duration) -> Self {
        self.settle_timeout = timeout;
        self
    }

    /// Filters the cached date option list through the venue calendar.
    /// Unparsable labels and closed days drop out here, before any further
    /// interaction.
    fn plan(&self, choices: &[SelectChoice]) -> Vec<DateTask> {
        let mut tasks = Vec::with_capacity(choices.len());
        for choice in choices {
            let date = match self.venue.calendar.adjust_label(&choice.value) {
                Ok(date) => date,
                Err(e) => {
                    log::warn!("{}: skipping date option: {e}", self.venue.id);
                    continue;
                }
            };
            let meals: Vec<Meal> = self.venue.calendar.available_meals(date).meals().collect();
            if meals.is_empty() {
                continue;
            }
            tasks.push(DateTask {
                raw_value: choice.value.clone(),
                date,
                meals,
            });
        }
        tasks
    }

    /// Runs the full cross-product for this venue. Per-item failures degrade
    /// that item only; the returned snapshot holds whatever was extracted,
    /// including on cancellation.
    pub async fn run(&self) -> crate::Result<MenuSnapshot> {
        let sel = &self.venue.selectors;
        self.driver.open(&self.venue.url).await?;
        self.driver.wait_for(sel.change_button).await?;

        let mut snapshot = MenuSnapshot::new();
        let mut state = NavState::Idle;
        // The option list never changes during a run; read once on the
        // first open.
        let mut plan: Option<Vec<DateTask>> = None;
        let mut date_idx = 0usize;
        let mut meal_idx = 0usize;
        // Index of the date the page control currently holds.
        let mut active_date: Option<usize> = None;

        loop {
            // Pair boundary: cooperative cancellation check.
            if matches!(state, NavState::Idle | NavState::ContentStable)
                && self.cancel.is_cancelled()
            {
                log::info!("{}: cancelled, returning partial snapshot", self.venue.id);
                break;
            }

            let tasks = plan.as_deref().unwrap_or_default();
            let work_left = plan.is_none() || date_idx < tasks.len();
            let date_active = active_date == Some(date_idx);

            match next_action(state, date_active, work_left) {
                NavAction::OpenSelector => {
                    self.driver.click(sel.change_button).await?;
                    if plan.is_none() {
                        let choices = self.driver.options(sel.date_select).await?;
                        plan = Some(self.plan(&choices));
                    }
                    state = NavState::SelectorOpen;
                }
                NavAction::ChooseDate => {
                    let Some(task) = tasks.get(date_idx) else {
                        state = NavState::Done;
                        continue;
                    };
                    match self
                        .driver
                        .select_value(sel.date_select, &task.raw_value)
                        .await
                    {
                        Ok(()) => {
                            active_date = Some(date_idx);
                            state = NavState::DateChosen;
                        }
                        Err(e) => {
                            // Fatal for this date only.
                            log::warn!("{}: skipping {}: {e}", self.venue.id, task.date);
                            date_idx += 1;
                            meal_idx = 0;
                            state = NavState::ContentStable;
                        }
                    }
                }
                NavAction::ChooseMeal => {
                    let task = &tasks[date_idx];
                    let meal = task.meals[meal_idx];
                    match self.driver.select_label(sel.meal_select, meal.label()).await {
                        Ok(()) => state = NavState::MealChosen,
                        Err(e) => {
                            // Like a failed date select, fatal for the
                            // whole date: remaining meals are not attempted.
                            log::warn!(
                                "{}: skipping rest of {} after {}: {e}",
                                self.venue.id,
                                task.date,
                                meal.label()
                            );
                            date_idx += 1;
                            meal_idx = 0;
                            state = NavState::ContentStable;
                        }
                    }
                }
                NavAction::Commit => {
                    let task = &tasks[date_idx];
                    let meal = task.meals[meal_idx];
                    self.driver.click(sel.done_button).await?;
                    let stable = self
                        .driver
                        .wait_stable(sel.menu_body, self.settle_timeout)
                        .await?;
                    let menu = if stable {
                        let html = self.driver.inner_html(sel.menu_body).await?;
                        MealMenu(parse_meal(&html, self.venue.keep_empty_sections))
                    } else {
                        log::warn!(
                            "{}: content timeout for {} {}, recording empty menu",
                            self.venue.id,
                            task.date,
                            meal.label()
                        );
                        MealMenu::default()
                    };
                    snapshot.insert(task.date, meal, menu);
                    Self::advance(tasks, &mut date_idx, &mut meal_idx);
                    state = NavState::ContentStable;
                }
                NavAction::Finish => break,
            }
        }
        Ok(snapshot)
    }

    fn advance(tasks: &[DateTask], date_idx: &mut usize, meal_idx: &mut usize) {
        *meal_idx += 1;
        if *meal_idx >= tasks[*date_idx].meals.len() {
            *date_idx += 1;
            *meal_idx = 0;
        }
    }
}
