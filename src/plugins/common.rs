//! Cross-platform plugin definitions.
//!
//! These register without a family prefix; their selectors have no
//! platform segment either.

use super::PluginSpec;

pub const PLUGINS: &[PluginSpec] = &[
    PluginSpec {
        name: "Banners",
        selector: "banners.Banners",
        summary: "Attempts to identify potential linux banners in an image",
        params: &[],
    },
    PluginSpec {
        name: "ConfigWriter",
        selector: "configwriter.ConfigWriter",
        summary: "Runs the automagics and both prints and outputs configuration in the output directory",
        params: &[],
    },
    PluginSpec {
        name: "FrameworkInfo",
        selector: "frameworkinfo.FrameworkInfo",
        summary: "Plugin to list the various modular components of Volatility",
        params: &[],
    },
    PluginSpec {
        name: "IsfInfo",
        selector: "isfinfo.IsfInfo",
        summary: "Determines information about the currently available ISF files, or a specific one",
        params: &[],
    },
    PluginSpec {
        name: "LayerWriter",
        selector: "layerwriter.LayerWriter",
        summary: "Runs the automagics and writes out the primary layer produced by the stacker",
        params: &[],
    },
    PluginSpec {
        name: "RegExScan",
        selector: "regexscan.RegExScan",
        summary: "Scans kernel memory using RegEx patterns",
        params: &[],
    },
    PluginSpec {
        name: "YaraScan",
        selector: "yarascan.YaraScan",
        summary: "Scans kernel memory using yara rules (string or file)",
        params: &[],
    },
    PluginSpec {
        name: "Vmscan",
        selector: "vmscan.Vmscan",
        summary: "Scans for Intel VT-d structures and generates VM volatility configs for them",
        params: &[],
    },
    PluginSpec {
        name: "Timeliner",
        selector: "timeliner.Timeliner",
        summary: "Runs all relevant plugins that provide time related information and orders the results by time",
        params: &[],
    },
    PluginSpec {
        name: "Timeline",
        selector: "timeliner.Timeline",
        summary: "Generates a timeline of events from memory",
        params: &[],
    },
];
