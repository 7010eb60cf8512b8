use std::sync::{Arc, Mutex};

use pathway_observability::spans::names;
use pathway_observability::{adaptation_span, generation_span, profiling_span, progress_span};
use tracing::span;
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// Records the name of every span opened.
#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

impl<S> Layer<S> for SpanNames
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(attrs.metadata().name());
    }
}

#[test]
fn macros_open_spans_under_the_exported_names() {
    let recorded = SpanNames::default();
    let subscriber = tracing_subscriber::registry().with(recorded.clone());

    tracing::subscriber::with_default(subscriber, || {
        let _g = generation_span!("learner-1", "course-1").entered();
        let _p = progress_span!("path-1", 3u32).entered();
        let _a = adaptation_span!("path-1", "reinforce").entered();
        let _s = profiling_span!("learner-1").entered();
    });

    assert_eq!(
        *recorded.0.lock().unwrap(),
        vec![names::GENERATION, names::PROGRESS, names::ADAPTATION, names::PROFILING]
    );
}
