//! Format layer creation macros

/// Builds a `fmt` layer in the given text format, writing to stderr.
macro_rules! create_fmt_layer {
    ($format:ident, $config:expr) => {
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer(std::io::stderr)
            .with_ansi($config.ansi)
            .with_target($config.target)
    };
}

/// Builds a JSON `fmt` layer, writing to stderr.
macro_rules! create_json_layer {
    ($config:expr) => {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(false)
            .with_ansi(false)
            .with_target($config.target)
    };
}
