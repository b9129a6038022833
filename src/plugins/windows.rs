//! Windows plugin definitions.
//!
//! `MemMap` and `RegistryPrintKey` are the only plugins in the catalogue
//! with a required parameter; `DllList` and `Handles` accept an optional
//! process-id filter.

use super::{ParamSpec, PluginSpec};

const PID_REQUIRED: &[ParamSpec] = &[ParamSpec {
    name: "pid",
    flag: "--pid",
    required: true,
}];

const PID_OPTIONAL: &[ParamSpec] = &[ParamSpec {
    name: "pid",
    flag: "--pid",
    required: false,
}];

pub const PLUGINS: &[PluginSpec] = &[
    PluginSpec {
        name: "PsList",
        selector: "windows.pslist.PsList",
        summary: "Lists running processes",
        params: &[],
    },
    PluginSpec {
        name: "PsTree",
        selector: "windows.pstree.PsTree",
        summary: "Shows process tree",
        params: &[],
    },
    PluginSpec {
        name: "PsScan",
        selector: "windows.psscan.PsScan",
        summary: "Scans for processes that might be hidden",
        params: &[],
    },
    PluginSpec {
        name: "Malfind",
        selector: "windows.malfind.Malfind",
        summary: "Lists process memory ranges that potentially contain injected code",
        params: &[],
    },
    // Volatility spells the class "Memmap" even though the family convention
    // would be "MemMap".
    PluginSpec {
        name: "MemMap",
        selector: "windows.memmap.Memmap",
        summary: "Shows the memory map for a specific process",
        params: PID_REQUIRED,
    },
    PluginSpec {
        name: "NetScan",
        selector: "windows.netscan.NetScan",
        summary: "Lists all network connections for all processes",
        params: &[],
    },
    PluginSpec {
        name: "RegistryHiveList",
        selector: "windows.registry.hivelist.HiveList",
        summary: "Lists all registry hives in memory",
        params: &[],
    },
    PluginSpec {
        name: "RegistryPrintKey",
        selector: "windows.registry.printkey.PrintKey",
        summary: "Prints the contents of a registry key",
        params: &[ParamSpec {
            name: "key",
            flag: "--key",
            required: true,
        }],
    },
    PluginSpec {
        name: "SvcScan",
        selector: "windows.svcscan.SvcScan",
        summary: "Lists Windows services",
        params: &[],
    },
    PluginSpec {
        name: "CmdLine",
        selector: "windows.cmdline.CmdLine",
        summary: "Shows process command line arguments",
        params: &[],
    },
    PluginSpec {
        name: "DllList",
        selector: "windows.dlllist.DllList",
        summary: "Lists loaded DLLs for each process",
        params: PID_OPTIONAL,
    },
    PluginSpec {
        name: "Handles",
        selector: "windows.handles.Handles",
        summary: "Lists open handles for each process",
        params: PID_OPTIONAL,
    },
    PluginSpec {
        name: "FileScan",
        selector: "windows.filescan.FileScan",
        summary: "Scans for file objects",
        params: &[],
    },
    PluginSpec {
        name: "ImageInfo",
        selector: "windows.info.Info",
        summary: "Gets information about a memory dump file",
        params: &[],
    },
    PluginSpec {
        name: "ADSScan",
        selector: "windows.mftscan.ADS",
        summary: "Scans for Alternate Data Stream",
        params: &[],
    },
    PluginSpec {
        name: "MFTScan",
        selector: "windows.mftscan.MFTScan",
        summary: "Scans for MFT FILE objects",
        params: &[],
    },
    PluginSpec {
        name: "ResidentData",
        selector: "windows.mftscan.ResidentData",
        summary: "Scans for MFT Records with Resident Data",
        params: &[],
    },
];
