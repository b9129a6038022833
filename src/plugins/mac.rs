//! macOS plugin definitions.

use super::PluginSpec;

pub const PLUGINS: &[PluginSpec] = &[
    PluginSpec {
        name: "PsList",
        selector: "mac.pslist.PsList",
        summary: "Lists the processes present in a particular mac memory image",
        params: &[],
    },
    PluginSpec {
        name: "PsTree",
        selector: "mac.pstree.PsTree",
        summary: "Plugin for listing processes in a tree based on their parent process ID",
        params: &[],
    },
    PluginSpec {
        name: "Bash",
        selector: "mac.bash.Bash",
        summary: "Recovers bash command history from memory",
        params: &[],
    },
    PluginSpec {
        name: "Check_syscall",
        selector: "mac.check_syscall.Check_syscall",
        summary: "Check system call table for hooks",
        params: &[],
    },
    PluginSpec {
        name: "Check_sysctl",
        selector: "mac.check_sysctl.Check_sysctl",
        summary: "Check sysctl handlers for hooks",
        params: &[],
    },
    PluginSpec {
        name: "Check_trap_table",
        selector: "mac.check_trap_table.Check_trap_table",
        summary: "Check mach trap table for hooks",
        params: &[],
    },
    PluginSpec {
        name: "Dmesg",
        selector: "mac.dmesg.Dmesg",
        summary: "Prints the kernel log buffer",
        params: &[],
    },
    PluginSpec {
        name: "Ifconfig",
        selector: "mac.ifconfig.Ifconfig",
        summary: "Lists network interface information for all devices",
        params: &[],
    },
    PluginSpec {
        name: "Kauth_listeners",
        selector: "mac.kauth_listeners.Kauth_listeners",
        summary: "Lists kauth listeners and their status",
        params: &[],
    },
    PluginSpec {
        name: "Kauth_scopes",
        selector: "mac.kauth_scopes.Kauth_scopes",
        summary: "Lists kauth scopes and their status",
        params: &[],
    },
    PluginSpec {
        name: "Kevents",
        selector: "mac.kevents.Kevents",
        summary: "Lists event handlers registered by processes",
        params: &[],
    },
    PluginSpec {
        name: "List_Files",
        selector: "mac.list_files.List_Files",
        summary: "Lists all open file descriptors for all processes",
        params: &[],
    },
    PluginSpec {
        name: "Lsmod",
        selector: "mac.lsmod.Lsmod",
        summary: "Lists loaded kernel modules",
        params: &[],
    },
    PluginSpec {
        name: "Lsof",
        selector: "mac.lsof.Lsof",
        summary: "Lists all open file descriptors for all processes",
        params: &[],
    },
    PluginSpec {
        name: "Malfind",
        selector: "mac.malfind.Malfind",
        summary: "Lists process memory ranges that potentially contain injected code",
        params: &[],
    },
    PluginSpec {
        name: "Mount",
        selector: "mac.mount.Mount",
        summary: "A module containing a collection of plugins that produce data typically found in Mac's mount command",
        params: &[],
    },
    PluginSpec {
        name: "Netstat",
        selector: "mac.netstat.Netstat",
        summary: "Lists all network connections for all processes",
        params: &[],
    },
    PluginSpec {
        name: "Maps",
        selector: "mac.proc_maps.Maps",
        summary: "Lists process memory ranges that potentially contain injected code",
        params: &[],
    },
    PluginSpec {
        name: "Psaux",
        selector: "mac.psaux.Psaux",
        summary: "Recovers program command line arguments",
        params: &[],
    },
    PluginSpec {
        name: "Socket_filters",
        selector: "mac.socket_filters.Socket_filters",
        summary: "Enumerates kernel socket filters",
        params: &[],
    },
    PluginSpec {
        name: "Timers",
        selector: "mac.timers.Timers",
        summary: "Check for malicious kernel timers",
        params: &[],
    },
    PluginSpec {
        name: "Trustedbsd",
        selector: "mac.trustedbsd.Trustedbsd",
        summary: "Checks for malicious trustedbsd modules",
        params: &[],
    },
    PluginSpec {
        name: "VFSevents",
        selector: "mac.vfsevents.VFSevents",
        summary: "Lists processes that are filtering file system events",
        params: &[],
    },
];
