#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Width of the floats the scene is built with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum FloatWidth {
    F32,
    F64,
}

impl std::fmt::Display for FloatWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FloatWidth::F32 => f.write_str("f32"),
            FloatWidth::F64 => f.write_str("f64"),
        }
    }
}

/// Build a simple plant out of reference primitives, merge it into one mesh, and log its metrics.
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,plantmesh=debug,scene=info",
        env = "SCENE_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Float width of the generated meshes
    #[arg(long, default_value_t = FloatWidth::F64)]
    pub float: FloatWidth,
    /// Number of internodes along the stem; each carries one leaf
    #[arg(short, long, default_value_t = 4)]
    pub internodes: usize,
    /// Length of each internode
    #[arg(long, default_value_t = 2.0)]
    pub internode_length: f64,
    /// Diameter at the base of the stem
    #[arg(long, default_value_t = 1.0)]
    pub diameter: f64,
    /// Top-to-base diameter ratio of each internode
    #[arg(long, default_value_t = 0.5)]
    pub ratio: f64,
    /// Triangles per internode; a positive multiple of 4
    #[arg(long, default_value_t = 40)]
    pub internode_triangles: usize,
    /// Leaf blade length and width
    #[arg(long, num_args = 2, value_names = ["LENGTH", "WIDTH"], default_values_t = [3.0, 1.0])]
    pub leaf: Vec<f64>,
    /// Triangles per leaf blade
    #[arg(long, default_value_t = 20)]
    pub leaf_triangles: usize,
}

/// Install a global subscriber writing to stderr, filtered and formatted as `cli` asks.
pub(crate) fn initialize_tracing(cli: &Cli) {
    let offset = time::UtcOffset::current_local_offset();
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            offset.as_ref().copied().unwrap_or(time::UtcOffset::UTC),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(cli.log_filter.as_str());

    match cli.log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
    // can't log this until the subscriber exists
    if let Err(e) = &offset {
        tracing::warn!("couldn't get local time offset: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_parse() {
        let cli = Cli::try_parse_from(["scene"]).unwrap();
        assert_eq!(cli.internodes, 4);
        assert_eq!(cli.float, FloatWidth::F64);
        assert_eq!(cli.leaf, vec![3.0, 1.0]);
    }

    #[test]
    fn leaf_takes_two_values() {
        let cli = Cli::try_parse_from(["scene", "--leaf", "2", "0.5", "--float", "f32"]).unwrap();
        assert_eq!(cli.leaf, vec![2.0, 0.5]);
        assert_eq!(cli.float, FloatWidth::F32);
        assert!(Cli::try_parse_from(["scene", "--leaf", "2"]).is_err());
    }
}
