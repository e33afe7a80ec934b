//! What happens once a swipe completes: report, then navigate.

use crate::analytics::AnalyticsSink;
use crate::navigation::Navigator;
use crate::options::SwipeButtonOptions;
use std::rc::Rc;
use swipe_button_foundation::GoalReached;

struct Reporting {
    sink: Rc<dyn AnalyticsSink>,
    counter_id: String,
    goal: Option<String>,
}

pub struct GoalAction {
    target_url: Option<String>,
    reporting: Option<Reporting>,
    navigator: Rc<dyn Navigator>,
}

impl GoalAction {
    /// Reporting is enabled only when both a sink and a counter id exist.
    pub fn new(
        options: &SwipeButtonOptions,
        navigator: Rc<dyn Navigator>,
        analytics: Option<Rc<dyn AnalyticsSink>>,
    ) -> Self {
        let reporting = match (analytics, options.metrika_id.as_deref()) {
            (Some(sink), Some(counter_id)) if !counter_id.is_empty() => Some(Reporting {
                sink,
                counter_id: counter_id.to_owned(),
                goal: options.metrika_goal.clone(),
            }),
            _ => None,
        };
        Self {
            target_url: options.target_url.clone().filter(|url| !url.is_empty()),
            reporting,
            navigator,
        }
    }

    pub fn target_url(&self) -> Option<&str> {
        self.target_url.as_deref()
    }

    pub fn reports(&self) -> bool {
        self.reporting.is_some()
    }

    pub fn fire(&self, goal: &GoalReached) {
        let Some(url) = self.target_url.as_deref() else {
            log::debug!("swipe goal {:?} without target url, nothing to do", goal.trigger);
            return;
        };

        let Some(reporting) = &self.reporting else {
            log::debug!("swipe goal {:?}, navigating to {url}", goal.trigger);
            self.navigator.navigate(url);
            return;
        };

        if let Some(name) = reporting.goal.as_deref() {
            reporting.sink.report_goal(&reporting.counter_id, name);
        }
        log::debug!(
            "swipe goal {:?}, reporting link {url} to counter {}",
            goal.trigger,
            reporting.counter_id
        );
        let navigator = Rc::clone(&self.navigator);
        let target = url.to_owned();
        reporting.sink.report_external_link(
            &reporting.counter_id,
            url,
            Box::new(move || navigator.navigate(&target)),
        );
    }
}

#[cfg(test)]
#[path = "tests/action_tests.rs"]
mod tests;
