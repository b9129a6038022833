//! Linux plugin definitions.

use super::PluginSpec;

pub const PLUGINS: &[PluginSpec] = &[
    PluginSpec {
        name: "PsList",
        selector: "linux.pslist.PsList",
        summary: "Lists the processes present in a particular linux memory image",
        params: &[],
    },
    PluginSpec {
        name: "PsTree",
        selector: "linux.pstree.PsTree",
        summary: "Plugin for listing processes in a tree based on their parent process ID",
        params: &[],
    },
    PluginSpec {
        name: "PsScan",
        selector: "linux.psscan.PsScan",
        summary: "Scans for processes present in a particular linux image",
        params: &[],
    },
    PluginSpec {
        name: "PsAux",
        selector: "linux.psaux.PsAux",
        summary: "Lists processes with their command line arguments",
        params: &[],
    },
    PluginSpec {
        name: "PsCallStack",
        selector: "linux.pscallstack.PsCallStack",
        summary: "Enumerates the call stack of each task",
        params: &[],
    },
    PluginSpec {
        name: "PIDHashTable",
        selector: "linux.pidhashtable.PIDHashTable",
        summary: "Enumerates processes through the PID hash table",
        params: &[],
    },
    PluginSpec {
        name: "Bash",
        selector: "linux.bash.Bash",
        summary: "Recovers bash command history from memory",
        params: &[],
    },
    PluginSpec {
        name: "Boottime",
        selector: "linux.boottime.Boottime",
        summary: "Shows the time the system was started",
        params: &[],
    },
    PluginSpec {
        name: "Capabilities",
        selector: "linux.capabilities.Capabilities",
        summary: "Lists process capabilities",
        params: &[],
    },
    PluginSpec {
        name: "Check_afinfo",
        selector: "linux.check_afinfo.Check_afinfo",
        summary: "Verifies the operation function pointers of network protocols",
        params: &[],
    },
    PluginSpec {
        name: "Check_creds",
        selector: "linux.check_creds.Check_creds",
        summary: "Checks if any processes are sharing credential structures",
        params: &[],
    },
    PluginSpec {
        name: "Check_idt",
        selector: "linux.check_idt.Check_idt",
        summary: "Checks if the IDT has been altered",
        params: &[],
    },
    PluginSpec {
        name: "Check_modules",
        selector: "linux.check_modules.Check_modules",
        summary: "Compares module list to sysfs info, if available",
        params: &[],
    },
    PluginSpec {
        name: "Check_syscall",
        selector: "linux.check_syscall.Check_syscall",
        summary: "Check system call table for hooks",
        params: &[],
    },
    PluginSpec {
        name: "EBPF",
        selector: "linux.ebpf.EBPF",
        summary: "Enumerate eBPF programs",
        params: &[],
    },
    PluginSpec {
        name: "Elfs",
        selector: "linux.elfs.Elfs",
        summary: "Lists all memory mapped ELF files for all processes",
        params: &[],
    },
    PluginSpec {
        name: "Envars",
        selector: "linux.envars.Envars",
        summary: "Lists processes with their environment variables",
        params: &[],
    },
    PluginSpec {
        name: "Fbdev",
        selector: "linux.graphics.fbdev.Fbdev",
        summary: "Extract framebuffers from the fbdev graphics subsystem",
        params: &[],
    },
    PluginSpec {
        name: "Hidden_modules",
        selector: "linux.hidden_modules.Hidden_modules",
        summary: "Carves memory to find hidden kernel modules",
        params: &[],
    },
    PluginSpec {
        name: "IOMem",
        selector: "linux.iomem.IOMem",
        summary: "Generates an output similar to /proc/iomem on a running system",
        params: &[],
    },
    PluginSpec {
        name: "IpAddr",
        selector: "linux.ip.Addr",
        summary: "Lists network interface information for all devices",
        params: &[],
    },
    PluginSpec {
        name: "IpLink",
        selector: "linux.ip.Link",
        summary: "Lists information about network interfaces similar to `ip link show`",
        params: &[],
    },
    PluginSpec {
        name: "Kallsyms",
        selector: "linux.kallsyms.Kallsyms",
        summary: "Kallsyms symbols enumeration plugin",
        params: &[],
    },
    PluginSpec {
        name: "Keyboard_notifiers",
        selector: "linux.keyboard_notifiers.Keyboard_notifiers",
        summary: "Parses the keyboard notifier call chain",
        params: &[],
    },
    PluginSpec {
        name: "Kmsg",
        selector: "linux.kmsg.Kmsg",
        summary: "Kernel log buffer reader",
        params: &[],
    },
    PluginSpec {
        name: "Kthreads",
        selector: "linux.kthreads.Kthreads",
        summary: "Enumerates kthread functions",
        params: &[],
    },
    PluginSpec {
        name: "LibraryList",
        selector: "linux.library_list.LibraryList",
        summary: "Enumerate libraries loaded into processes",
        params: &[],
    },
    PluginSpec {
        name: "Lsmod",
        selector: "linux.lsmod.Lsmod",
        summary: "Lists loaded kernel modules",
        params: &[],
    },
    PluginSpec {
        name: "Lsof",
        selector: "linux.lsof.Lsof",
        summary: "Lists open files for each processes",
        params: &[],
    },
    PluginSpec {
        name: "Malfind",
        selector: "linux.malfind.Malfind",
        summary: "Lists process memory ranges that potentially contain injected code",
        params: &[],
    },
    PluginSpec {
        name: "ModuleExtract",
        selector: "linux.module_extract.ModuleExtract",
        summary: "Recreates an ELF file from a specific address in the kernel",
        params: &[],
    },
    PluginSpec {
        name: "Modxview",
        selector: "linux.modxview.Modxview",
        summary: "Centralize lsmod, check_modules and hidden_modules results to efficiently spot modules presence and taints",
        params: &[],
    },
    PluginSpec {
        name: "MountInfo",
        selector: "linux.mountinfo.MountInfo",
        summary: "Lists mount points on processes mount namespaces",
        params: &[],
    },
    PluginSpec {
        name: "Netfilter",
        selector: "linux.netfilter.Netfilter",
        summary: "Lists Netfilter hooks",
        params: &[],
    },
    PluginSpec {
        name: "Files",
        selector: "linux.pagecache.Files",
        summary: "Lists files from memory",
        params: &[],
    },
    PluginSpec {
        name: "InodePages",
        selector: "linux.pagecache.InodePages",
        summary: "Lists and recovers cached inode pages",
        params: &[],
    },
    PluginSpec {
        name: "RecoverFs",
        selector: "linux.pagecache.RecoverFs",
        summary: "Recovers the cached filesystem (directories, files, symlinks) into a compressed tarball",
        params: &[],
    },
    PluginSpec {
        name: "ProcMaps",
        selector: "linux.proc.Maps",
        summary: "Lists all memory maps for all processes",
        params: &[],
    },
    PluginSpec {
        name: "Ptrace",
        selector: "linux.ptrace.Ptrace",
        summary: "Enumerates ptrace's tracer and tracee tasks",
        params: &[],
    },
    PluginSpec {
        name: "Sockstat",
        selector: "linux.sockstat.Sockstat",
        summary: "Lists all network connections for all processes",
        params: &[],
    },
    PluginSpec {
        name: "CheckFtrace",
        selector: "linux.tracing.ftrace.CheckFtrace",
        summary: "Detect ftrace hooking",
        params: &[],
    },
    PluginSpec {
        name: "PerfEvents",
        selector: "linux.tracing.perf_events.PerfEvents",
        summary: "Lists performance events for each process",
        params: &[],
    },
    PluginSpec {
        name: "CheckTracepoints",
        selector: "linux.tracing.tracepoints.CheckTracepoints",
        summary: "Detect tracepoints hooking",
        params: &[],
    },
    // Volatility spells this selector in lowercase, unlike every other plugin.
    PluginSpec {
        name: "TtyCheck",
        selector: "linux.tty_check.tty_check",
        summary: "Checks tty devices for hooks",
        params: &[],
    },
    PluginSpec {
        name: "VmaRegExScan",
        selector: "linux.vmaregexscan.VmaRegExScan",
        summary: "Scans all virtual memory areas for tasks using RegEx",
        params: &[],
    },
    PluginSpec {
        name: "VmaYaraScan",
        selector: "linux.vmayarascan.VmaYaraScan",
        summary: "Scans all virtual memory areas for tasks using yara",
        params: &[],
    },
    PluginSpec {
        name: "VMCoreInfo",
        selector: "linux.vmcoreinfo.VMCoreInfo",
        summary: "Enumerate VMCoreInfo tables",
        params: &[],
    },
];
