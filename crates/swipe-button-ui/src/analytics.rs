/// Analytics reporting capability (Yandex Metrika on the web).
///
/// Reporting an outbound link is asynchronous; `on_complete` must be called
/// once the report was sent. Navigation waits for it, with no timeout.
pub trait AnalyticsSink {
    fn report_goal(&self, counter_id: &str, goal: &str);

    fn report_external_link(&self, counter_id: &str, url: &str, on_complete: Box<dyn FnOnce()>);
}
