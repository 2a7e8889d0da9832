use crate::span::Span;

/// A rejected input with the span it points at and an optional hint.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            help: None,
        }
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    fn report<'a>(&self, name: &'a str, color: bool) -> ariadne::Report<'a, (&'a str, std::ops::Range<usize>)> {
        use ariadne::{Color, Config, Label, Report, ReportKind};

        let mut report = Report::build(ReportKind::Error, name, self.span.start as usize)
            .with_config(Config::default().with_color(color))
            .with_message(&self.message)
            .with_label(
                Label::new((name, self.span.range()))
                    .with_message(&self.message)
                    .with_color(Color::Red),
            );

        if let Some(help) = &self.help {
            report = report.with_help(help);
        }

        report.finish()
    }

    /// Render the diagnostic to stderr using ariadne.
    ///
    /// `name` labels the source (a file path, or `<path>` for a path typed
    /// at the prompt); `source` is the text the span points into.
    pub fn render(&self, name: &str, source: &str) {
        use ariadne::Source;

        if let Err(e) = self
            .report(name, true)
            .eprint((name, Source::from(source)))
        {
            eprintln!("error: {}", self.message);
            tracing::debug!(error = %e, "diagnostic rendering failed");
        }
    }

    /// Render without color into a string.
    pub fn render_to_string(&self, name: &str, source: &str) -> String {
        use ariadne::Source;

        let mut buf = Vec::new();
        match self
            .report(name, false)
            .write((name, Source::from(source)), &mut buf)
        {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("error: {}", self.message),
        }
    }
}
