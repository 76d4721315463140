use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fg_binding::{
    scan, BindingMode, BindingTarget, Error, Evaluate, ExpressionCompiler, InterpolationExpression,
};
use pretty_assertions::assert_eq;

/// Stand-in for the expression language: accepts any non-blank source and
/// remembers it as a property path.
struct MarkerCompiler;

#[derive(Debug)]
struct MarkerExpression {
    path: String,
}

#[derive(Debug, thiserror::Error)]
#[error("not a property path: `{0}`")]
struct ParseFailure(String);

impl ExpressionCompiler for MarkerCompiler {
    type Compiled = MarkerExpression;
    type Error = ParseFailure;

    fn compile(&self, source: &str) -> Result<MarkerExpression, ParseFailure> {
        if source.trim().is_empty() {
            return Err(ParseFailure(source.to_owned()));
        }
        Ok(MarkerExpression {
            path: source.trim().to_owned(),
        })
    }
}

impl Evaluate<HashMap<String, String>> for MarkerExpression {
    type Value = String;

    fn evaluate(&self, scope: &HashMap<String, String>) -> fg_binding::Result<String> {
        scope
            .get(&self.path)
            .cloned()
            .ok_or_else(|| Error::Generic(format!("`{}` is not in scope", self.path)))
    }
}

#[derive(Debug, Default)]
struct RecordingTarget {
    values: Vec<(String, String)>,
    texts: Vec<(String, String)>,
}

impl BindingTarget<String> for RecordingTarget {
    fn bind_value(&mut self, attribute: &str, value: String) -> fg_binding::Result<()> {
        self.values.push((attribute.to_owned(), value));
        Ok(())
    }

    fn bind_text(&mut self, attribute: &str, text: &str) -> fg_binding::Result<()> {
        self.texts.push((attribute.to_owned(), text.to_owned()));
        Ok(())
    }
}

fn compile(source: &str) -> InterpolationExpression<MarkerExpression> {
    let parts = scan(source).into_parts().expect("interpolated value");
    InterpolationExpression::build(parts, &MarkerCompiler).expect("compiles")
}

fn scope(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn build_compiles_each_expression_in_order() {
    let expression = compile("${first} ${second}");
    let compiled = expression.compiled();
    assert_eq!(compiled.len(), 2);
    assert_eq!(compiled[0].path, "first");
    assert_eq!(compiled[1].path, "second");
}

#[test]
fn build_reports_offending_source() {
    let parts = scan("a${ }b").into_parts().expect("interpolated value");
    let err = InterpolationExpression::build(parts, &MarkerCompiler).unwrap_err();
    assert_eq!(err.to_string(), "failed to compile embedded expression ` `");
    let source = std::error::Error::source(&err).expect("source");
    assert_eq!(source.to_string(), "not a property path: ` `");
    match err {
        Error::Compile { expression, .. } => assert_eq!(expression, " "),
        other => panic!("expected compile error, got {:?}", other),
    }
}

#[test]
fn single_compiled_expression_requires_bare_placeholder() {
    assert!(compile("${x}").single_expression().is_some());
    assert!(compile("a${x}").single_expression().is_none());
    assert!(compile("${x}${y}").single_expression().is_none());
}

#[test]
fn single_expression_binds_raw_value() {
    let expression = Arc::new(compile("${name}"));
    let mut binding = expression.create_binding(RecordingTarget::default(), "title");
    binding.update(&scope(&[("name", "Ada")])).expect("update");
    assert_eq!(
        binding.target().values,
        vec![("title".to_owned(), "Ada".to_owned())]
    );
    assert!(binding.target().texts.is_empty());
}

#[test]
fn mixed_parts_bind_joined_text() {
    let expression = Arc::new(compile("Hello ${first} ${last}!"));
    let mut binding = expression.create_binding(RecordingTarget::default(), "textContent");
    binding
        .update(&scope(&[("first", "Ada"), ("last", "Lovelace")]))
        .expect("update");
    assert_eq!(
        binding.target().texts,
        vec![("textContent".to_owned(), "Hello Ada Lovelace!".to_owned())]
    );
    assert!(binding.target().values.is_empty());
}

#[test]
fn update_rerenders_on_scope_change() {
    let expression = Arc::new(compile("v=${n}"));
    let mut binding = expression.create_binding(RecordingTarget::default(), "data-v");
    binding.update(&scope(&[("n", "1")])).expect("update");
    binding.update(&scope(&[("n", "2")])).expect("update");
    assert_eq!(
        binding.target().texts,
        vec![
            ("data-v".to_owned(), "v=1".to_owned()),
            ("data-v".to_owned(), "v=2".to_owned()),
        ]
    );
}

#[test]
fn evaluation_failure_reaches_nothing() {
    let expression = Arc::new(compile("a${missing}b"));
    let mut binding = expression.create_binding(RecordingTarget::default(), "alt");
    let err = binding.update(&HashMap::new()).unwrap_err();
    assert!(err.to_string().contains("missing"));
    assert!(binding.target().texts.is_empty());
    assert!(binding.target().values.is_empty());
}

#[test]
fn bindings_share_one_expression() {
    let expression = Arc::new(compile("${name}"));
    let first = Arc::clone(&expression).create_binding(RecordingTarget::default(), "a");
    let second = Arc::clone(&expression).create_binding(RecordingTarget::default(), "b");
    assert_eq!(first.attribute(), "a");
    assert_eq!(second.attribute(), "b");
    assert!(Arc::ptr_eq(first.expression(), second.expression()));
    assert_eq!(Arc::strong_count(&expression), 3);
}

#[test]
fn mode_defaults_to_one_way() {
    let expression = compile("${x}");
    assert_eq!(expression.mode(), BindingMode::OneWay);
}

#[test]
fn with_mode_carries_into_bindings() {
    let expression = Arc::new(compile("${x}").with_mode(BindingMode::OneTime));
    let binding = expression.create_binding(RecordingTarget::default(), "value");
    assert_eq!(binding.mode(), BindingMode::OneTime);
}

struct InfoCounter {
    count: Arc<AtomicUsize>,
}

impl tracing::Subscriber for InfoCounter {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        *metadata.level() == tracing::Level::INFO
    }

    fn new_span(&self, _span: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(1)
    }

    fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        if event.metadata().target().starts_with("fg_binding") {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _span: &tracing::span::Id) {}

    fn exit(&self, _span: &tracing::span::Id) {}
}

#[test]
fn style_attribute_logs_advisory_on_creation() {
    let infos = Arc::new(AtomicUsize::new(0));
    let subscriber = InfoCounter {
        count: Arc::clone(&infos),
    };
    tracing::subscriber::with_default(subscriber, || {
        let expression = Arc::new(compile("${color}"));
        let _binding = expression.create_binding(RecordingTarget::default(), "style");
    });
    assert_eq!(infos.load(Ordering::SeqCst), 1);
}

#[test]
fn other_attributes_log_nothing() {
    let infos = Arc::new(AtomicUsize::new(0));
    let subscriber = InfoCounter {
        count: Arc::clone(&infos),
    };
    tracing::subscriber::with_default(subscriber, || {
        let expression = Arc::new(compile("${color}"));
        let _binding = expression.create_binding(RecordingTarget::default(), "class");
    });
    assert_eq!(infos.load(Ordering::SeqCst), 0);
}
