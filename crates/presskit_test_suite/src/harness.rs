//! Test harness for scenario tests
//!
//! Simulates a host around the engine:
//! - mounting and re-rendering controls against a shared id allocator
//! - querying the rendered tree by attribute
//! - dispatching simulated gestures per surface
//! - recording which callbacks fired

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use presskit_core::prelude::*;
use presskit_core::IdLease;
use presskit_platform::{ClickEvent, EventKind, PressEvent, Surface, TouchEndEvent};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a `tracing` subscriber for tests and the scenario runner
///
/// Honors `RUST_LOG`, falling back to `default_filter`. Safe to call more
/// than once; later calls are no-ops.
pub fn init_logging(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Result of a scenario
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TestResult {
    /// Scenario passed
    Passed,
    /// Scenario failed
    Failed { reason: String },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestResult::Passed)
    }
}

/// Harness configuration
#[derive(Clone, Debug)]
pub struct TestHarnessConfig {
    /// Id strategy for the harness allocator
    pub id_strategy: IdStrategy,
    /// Fail a scenario that leaves controls mounted
    pub check_leaks: bool,
}

impl Default for TestHarnessConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Sequential,
            check_leaks: true,
        }
    }
}

/// Records which callbacks fired, in order
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    fired: Rc<RefCell<Vec<EventKind>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation
    pub fn record(&self, kind: EventKind) {
        self.fired.borrow_mut().push(kind);
    }

    /// Callback recording clicks
    pub fn on_click(&self) -> impl Fn(&ClickEvent) + 'static {
        let recorder = self.clone();
        move |_| recorder.record(EventKind::Click)
    }

    /// Callback recording touch ends
    pub fn on_touch_end(&self) -> impl Fn(&TouchEndEvent) + 'static {
        let recorder = self.clone();
        move |_| recorder.record(EventKind::TouchEnd)
    }

    /// Callback recording presses
    pub fn on_press(&self) -> impl Fn(&PressEvent) + 'static {
        let recorder = self.clone();
        move |_| recorder.record(EventKind::Press)
    }

    /// Subscribe `props` to all three kinds
    pub fn wire(&self, props: ButtonProps) -> ButtonProps {
        props
            .on_click(self.on_click())
            .on_touch_end(self.on_touch_end())
            .on_press(self.on_press())
    }

    /// Invocations of `kind` so far
    pub fn count(&self, kind: EventKind) -> usize {
        self.fired.borrow().iter().filter(|k| **k == kind).count()
    }

    /// Total invocations so far
    pub fn total(&self) -> usize {
        self.fired.borrow().len()
    }

    /// Every invocation, in order
    pub fn fired(&self) -> Vec<EventKind> {
        self.fired.borrow().clone()
    }

    pub fn clear(&self) {
        self.fired.borrow_mut().clear();
    }
}

/// Reference skin used by the scenarios
///
/// Icon renders as `<span class="icon">`, main as a `<button>` carrying the
/// props and handlers, container as a `<div class="button-container">`.
pub fn reference_skin(props: ButtonProps) -> ButtonProps {
    props
        .render_icon(|_, icon| Element::new("span").with_attr("class", "icon").child(icon).into())
        .render_main(|props| {
            Element::new("button")
                .spread(props)
                .maybe_child(props.icon.clone())
                .maybe_child(props.attributes.text.clone())
                .into()
        })
        .render_container(|props, main| {
            Element::new("div")
                .with_attr("class", "button-container")
                .with_attr("id", props.id.derive("container"))
                .maybe_child(main)
                .into()
        })
}

/// Simulated gestures on a rendered element
pub trait Gestures {
    /// Pointer click
    fn click(&self) -> DispatchOutcome;
    /// Finger lifted
    fn touch_end(&self) -> DispatchOutcome;
    /// Native press
    fn press(&self) -> DispatchOutcome;
    /// One tap as `surface` delivers it
    fn tap(&self, surface: Surface) -> Vec<DispatchOutcome>;
}

impl Gestures for Element {
    fn click(&self) -> DispatchOutcome {
        self.dispatch(&ClickEvent::new(1.0, 1.0).into())
    }

    fn touch_end(&self) -> DispatchOutcome {
        self.dispatch(&TouchEndEvent::new(0, 1.0, 1.0).into())
    }

    fn press(&self) -> DispatchOutcome {
        self.dispatch(&PressEvent::new(1.0, 1.0).into())
    }

    fn tap(&self, surface: Surface) -> Vec<DispatchOutcome> {
        surface
            .tap(1.0, 1.0)
            .iter()
            .map(|event| self.dispatch(event))
            .collect()
    }
}

/// The output of one render pass
#[derive(Debug)]
pub struct Screen {
    root: Option<Node>,
}

impl Screen {
    pub fn new(root: Option<Node>) -> Self {
        Self { root }
    }

    /// The rendered tree, if anything rendered
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// First element whose attribute `name` equals `value`
    pub fn get_by_attr(&self, name: &str, value: &str) -> Result<&Element> {
        self.root
            .as_ref()
            .and_then(|root| root.find_by_attr(name, value))
            .ok_or_else(|| anyhow!("no element with {}=\"{}\" in {}", name, value, self.markup()))
    }

    /// First element tagged `data-cy="value"`
    pub fn get_by_data_cy(&self, value: &str) -> Result<&Element> {
        self.get_by_attr("data-cy", value)
    }

    /// The element carrying a control's id
    pub fn get_by_id(&self, id: &InstanceId) -> Result<&Element> {
        self.get_by_attr("id", id.as_str())
    }

    /// Text content of the whole tree
    pub fn text(&self) -> String {
        self.root.as_ref().map(Node::text_content).unwrap_or_default()
    }

    /// Markup of the whole tree
    pub fn markup(&self) -> String {
        self.root.as_ref().map(Node::to_string).unwrap_or_default()
    }
}

/// Context for a single scenario
pub struct TestContext {
    name: String,
    allocator: IdAllocator,
    recorder: EventRecorder,
}

impl TestContext {
    pub fn new(name: &str, allocator: IdAllocator) -> Self {
        Self {
            name: name.to_string(),
            allocator,
            recorder: EventRecorder::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scenario's id allocator
    pub fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }

    /// The scenario's callback recorder
    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    /// Mount a button with a generated id
    pub fn mount(&self) -> Button {
        Button::mount(&self.allocator)
    }

    /// Mount a button as described by `config`
    pub fn mount_with(&self, config: &ControlConfig) -> Result<Button> {
        Button::mount_with(&self.allocator, config)
            .with_context(|| format!("mounting button in {}", self.name))
    }

    /// Claim an id directly, as a sibling component would
    pub fn claim(&self, id: &str) -> Result<IdLease> {
        Ok(self.allocator.claim(id)?)
    }

    /// Render `button` with `props`
    pub fn render(&self, button: &Button, props: ButtonProps) -> Result<Screen> {
        let root = button
            .render(props)
            .with_context(|| format!("rendering {} in {}", button.id(), self.name))?;
        Ok(Screen::new(root))
    }

    /// Render `button` with `props` dressed in the reference skin
    pub fn render_skinned(&self, button: &Button, props: ButtonProps) -> Result<Screen> {
        self.render(button, reference_skin(props))
    }
}

/// Test harness for running scenarios
pub struct TestHarness {
    allocator: IdAllocator,
    config: TestHarnessConfig,
}

impl TestHarness {
    /// Create a new test harness with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TestHarnessConfig::default())
    }

    /// Create a new test harness with custom configuration
    pub fn with_config(config: TestHarnessConfig) -> Result<Self> {
        Ok(Self {
            allocator: IdAllocator::with_strategy(config.id_strategy),
            config,
        })
    }

    /// The allocator shared by every scenario this harness runs
    pub fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }

    /// Create a scenario context
    pub fn create_context(&self, name: &str) -> TestContext {
        TestContext::new(name, self.allocator.clone())
    }

    /// Run a scenario
    ///
    /// Fails if the scenario returns an error, or (with `check_leaks`) if it
    /// leaves controls mounted.
    pub fn run_test<F>(&self, name: &str, test_fn: F) -> TestResult
    where
        F: FnOnce(&mut TestContext) -> Result<()>,
    {
        let mounted_before = self.allocator.mounted_count();
        let mut ctx = self.create_context(name);

        if let Err(e) = test_fn(&mut ctx) {
            return TestResult::Failed {
                reason: format!("{:#}", e),
            };
        }
        drop(ctx);

        let leaked = self.allocator.mounted_count().saturating_sub(mounted_before);
        if self.config.check_leaks && leaked > 0 {
            return TestResult::Failed {
                reason: format!("{} control(s) still mounted", leaked),
            };
        }
        TestResult::Passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_counts_by_kind() {
        let recorder = EventRecorder::new();
        recorder.on_click()(&ClickEvent::default());
        recorder.on_press()(&PressEvent::default());
        recorder.on_click()(&ClickEvent::default());

        assert_eq!(recorder.count(EventKind::Click), 2);
        assert_eq!(recorder.count(EventKind::TouchEnd), 0);
        assert_eq!(recorder.total(), 3);
        recorder.clear();
        assert_eq!(recorder.total(), 0);
    }

    #[test]
    fn test_run_test_reports_errors_and_leaks() {
        let harness = TestHarness::new().unwrap();

        assert!(harness.run_test("ok", |_| Ok(())).is_passed());

        let failed = harness.run_test("err", |_| Err(anyhow!("boom")));
        assert_eq!(
            failed,
            TestResult::Failed {
                reason: "boom".into()
            }
        );

        let leaked = harness.run_test("leak", |ctx| {
            std::mem::forget(ctx.mount());
            Ok(())
        });
        assert!(!leaked.is_passed());
    }

    #[test]
    fn test_screen_lookup_failure_shows_markup() {
        let screen = Screen::new(Some(Node::text("hi")));
        let err = screen.get_by_data_cy("nope").unwrap_err();
        assert!(err.to_string().contains("data-cy=\"nope\""));
        assert!(err.to_string().contains("hi"));
        assert!(Screen::new(None).is_empty());
    }
}
