// Fact assembly: probes run in display order into one immutable list

use crate::core::probes::{
    battery, cpu, device, display, gpu, identity, kernel, memory, network, os, packages, shell,
    uptime, ProbeContext, UNKNOWN,
};
use log::debug;

pub const SEPARATOR: &str = "-----------------";

/// How a fact is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactKind {
    /// The `user@host` heading
    Title,
    Separator,
    Entry,
}

/// One display line of host information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub kind: FactKind,
    pub label: Option<&'static str>,
    pub value: String,
}

impl Fact {
    pub fn title(value: String) -> Self {
        Self {
            kind: FactKind::Title,
            label: None,
            value,
        }
    }

    pub fn separator() -> Self {
        Self {
            kind: FactKind::Separator,
            label: None,
            value: SEPARATOR.to_string(),
        }
    }

    pub fn entry(label: &'static str, value: String) -> Self {
        Self {
            kind: FactKind::Entry,
            label: Some(label),
            value,
        }
    }

    /// An entry whose value already carries its own label
    pub fn unlabeled(value: String) -> Self {
        Self {
            kind: FactKind::Entry,
            label: None,
            value,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.value == UNKNOWN
    }

    /// The visible text of this line, without any styling
    pub fn text(&self) -> String {
        match self.label {
            Some(label) => format!("{}: {}", label, self.value),
            None => self.value.clone(),
        }
    }
}

/// Run every probe and return the facts in display order.
///
/// Mandatory facts are always present, possibly as `"Unknown"`. Optional
/// facts (local IP, resolution, packages, manufacturer, model, battery) are
/// left out entirely when unavailable.
pub fn collect_facts(ctx: &ProbeContext) -> Vec<Fact> {
    debug!("Collecting facts for platform {}", ctx.platform.name());

    let mut facts = vec![
        Fact::title(identity::probe(ctx)),
        Fact::separator(),
        Fact::entry("OS", os::probe(ctx)),
        Fact::entry("Kernel", kernel::probe(ctx)),
        Fact::entry("Uptime", uptime::probe(ctx)),
        Fact::entry("Shell", shell::probe(ctx)),
        Fact::entry("CPU", format!("{} ({})", cpu::probe(ctx), ctx.host.cpu_count())),
        Fact::entry("GPU", gpu::probe(ctx)),
        Fact::entry("Memory", memory::probe_memory(ctx)),
        Fact::entry("Disk", memory::probe_disk(ctx)),
    ];

    let optional = [
        Fact::unlabeled(network::probe(ctx)),
        Fact::entry("Resolution", display::probe(ctx)),
        Fact::entry("Packages", packages::probe(ctx)),
        Fact::entry("Manufacturer", device::probe_manufacturer(ctx)),
        Fact::entry("Model", device::probe_model(ctx)),
        Fact::entry("Battery", battery::probe(ctx)),
    ];

    for fact in optional {
        if fact.is_unknown() {
            debug!("Omitting unavailable fact {}", fact.label.unwrap_or("Local IP"));
        } else {
            facts.push(fact);
        }
    }

    facts
}
