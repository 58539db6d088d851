//! `netgraph scc`: strongly connected component decomposition.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use netgraph_core::config::AnalysisConfig;
use netgraph_core::report::SccReport;
use netgraph_core::scc::strongly_connected_components;

use crate::cmd::load_graph;
use crate::output::{OutputMode, fmt_metric, pretty_kv, pretty_section, render, text_kv};

/// Arguments for `netgraph scc`.
#[derive(Args, Debug)]
pub struct SccArgs {
    /// JSON network description (`{"vertices": [...], "arcs": [...]}`).
    pub file: PathBuf,

    /// Only list components with at least this many members.
    #[arg(long)]
    pub min_size: Option<usize>,
}

pub fn run_scc(args: &SccArgs, config: &AnalysisConfig, mode: OutputMode) -> Result<()> {
    let graph = load_graph(&args.file)?;
    let result = strongly_connected_components(&graph);

    let mut scc_config = config.scc.clone();
    if let Some(min) = args.min_size {
        scc_config.min_listed_size = min;
    }

    let report = SccReport::from_result(&result, &scc_config);
    info!(
        components = report.component_count,
        largest_fraction = report.largest_fraction,
        "decomposed network"
    );

    let precision = config.output.precision;
    render(mode, &report, |r, mode, w| write_human(r, precision, mode, w))
}

fn write_human(
    report: &SccReport,
    precision: usize,
    mode: OutputMode,
    w: &mut dyn Write,
) -> io::Result<()> {
    let count = report.component_count.to_string();
    let fraction = fmt_metric(report.largest_fraction, precision);

    if mode == OutputMode::Pretty {
        pretty_section(w, "Strongly connected components")?;
        pretty_kv(w, "components", count)?;
        pretty_kv(w, "largest_fraction", fraction)?;
        for (i, component) in report.components.iter().enumerate() {
            writeln!(w)?;
            writeln!(w, "scc {i}  size {}", component.len())?;
            for member in &component.members {
                writeln!(w, "    {member}")?;
            }
        }
    } else {
        text_kv(w, "components", count)?;
        text_kv(w, "largest_fraction", fraction)?;
        for component in &report.components {
            writeln!(w, "{}", component.members.join(" "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use netgraph_core::config::SccConfig;
    use netgraph_core::graph::Graph;

    #[test]
    fn text_output_lists_members_per_line() {
        let mut g = Graph::new();
        for v in ["A", "B", "C"] {
            g.add_vertex(v);
        }
        g.add_edge("A", "B", None);
        g.add_edge("B", "A", None);
        let result = strongly_connected_components(&g);
        let report = SccReport::from_result(
            &result,
            &SccConfig {
                list_members: true,
                min_listed_size: 2,
            },
        );

        let mut buf = Vec::new();
        write_human(&report, 3, OutputMode::Text, &mut buf).expect("write");
        let out = String::from_utf8(buf).expect("utf8");
        assert_eq!(out, "components=2\nlargest_fraction=0.667\nA B\n");
    }
}
