//! `netgraph analyze`: structural metrics for one network.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use netgraph_core::config::AnalysisConfig;
use netgraph_core::metrics::DegreeStats;
use netgraph_core::report::NetworkReport;

use crate::cmd::load_graph;
use crate::output::{OutputMode, fmt_metric, pretty_kv, pretty_section, render, text_kv};

/// Arguments for `netgraph analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON network description (`{"vertices": [...], "arcs": [...]}`).
    pub file: PathBuf,

    /// Skip geodesic distance stats (one BFS per vertex).
    #[arg(long)]
    pub no_geodesic: bool,
}

pub fn run_analyze(args: &AnalyzeArgs, config: &AnalysisConfig, mode: OutputMode) -> Result<()> {
    let graph = load_graph(&args.file)?;

    let mut metrics = config.metrics.clone();
    if args.no_geodesic {
        metrics.geodesic = false;
    }

    let report = NetworkReport::from_graph(&graph, &metrics);
    info!(
        vertices = report.vertex_count,
        edges = report.edge_count,
        "analyzed network"
    );

    let precision = config.output.precision;
    let name = args.file.display().to_string();
    render(mode, &report, |r, mode, w| write_human(r, &name, precision, mode, w))
}

fn fmt_stats(stats: Option<DegreeStats>) -> String {
    stats.map_or_else(
        || "n/a".to_string(),
        |s| format!("min {} / max {}", s.min, s.max),
    )
}

fn write_human(
    report: &NetworkReport,
    name: &str,
    precision: usize,
    mode: OutputMode,
    w: &mut dyn Write,
) -> io::Result<()> {
    let mut rows: Vec<(&str, String)> = vec![
        ("vertices", report.vertex_count.to_string()),
        ("edges", report.edge_count.to_string()),
        ("undirected_edges", report.undirected_edge_count.to_string()),
        ("density", fmt_metric(report.density, precision)),
        ("in_degree", fmt_stats(report.in_degree)),
        ("out_degree", fmt_stats(report.out_degree)),
        ("reciprocity", fmt_metric(report.reciprocity, precision)),
        (
            "degree_correlation",
            fmt_metric(report.degree_correlation, precision),
        ),
        (
            "clustering_coefficient",
            fmt_metric(report.clustering_coefficient, precision),
        ),
    ];
    if let Some(geo) = report.geodesic {
        rows.push(("mean_geodesic", fmt_metric(geo.mean, precision)));
        rows.push(("diameter", geo.diameter.to_string()));
    }

    if mode == OutputMode::Pretty {
        pretty_section(w, &format!("Network: {name}"))?;
        for (key, value) in rows {
            pretty_kv(w, key, value)?;
        }
    } else {
        for (key, value) in rows {
            text_kv(w, key, value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use netgraph_core::config::MetricsConfig;
    use netgraph_core::graph::Graph;

    #[test]
    fn text_output_lists_every_metric() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        g.add_edge("A", "B", None);
        let report = NetworkReport::from_graph(&g, &MetricsConfig::default());

        let mut buf = Vec::new();
        write_human(&report, "t.json", 2, OutputMode::Text, &mut buf).expect("write");
        let out = String::from_utf8(buf).expect("utf8");

        assert!(out.contains("density=0.50\n"));
        assert!(out.contains("degree_correlation=undefined\n"));
        assert!(out.contains("out_degree=min 0 / max 1\n"));
        assert!(out.contains("diameter=1\n"));
    }
}
