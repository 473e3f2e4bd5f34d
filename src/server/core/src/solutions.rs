/* src/server/core/src/solutions.rs */

//! Solution areas the company offers. The list is fixed and the same for both
//! locales; only the copy is translated. CMS `solutions` entries add long-form
//! content on top, matched by slug.

use crate::locale::Locale;
use crate::slug::name_to_slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionArea {
  /// English name; the URL slug is derived from it
  pub name: &'static str,
  pub name_id: &'static str,
  pub summary: &'static str,
  pub summary_id: &'static str,
}

impl SolutionArea {
  pub fn slug(&self) -> String {
    name_to_slug(self.name)
  }

  pub fn title(&self, locale: Locale) -> &'static str {
    match locale {
      Locale::En => self.name,
      Locale::Id => self.name_id,
    }
  }

  pub fn summary(&self, locale: Locale) -> &'static str {
    match locale {
      Locale::En => self.summary,
      Locale::Id => self.summary_id,
    }
  }
}

pub const SOLUTION_AREAS: &[SolutionArea] = &[
  SolutionArea {
    name: "Data Center Infrastructure",
    name_id: "Infrastruktur Data Center",
    summary: "Design, build and maintenance of server rooms, racks, power and cooling.",
    summary_id: "Perancangan, pembangunan dan pemeliharaan ruang server, rak, daya dan pendingin.",
  },
  SolutionArea {
    name: "Network & Security",
    name_id: "Jaringan & Keamanan",
    summary: "Enterprise LAN/WAN, wireless, firewalls and zero-trust access.",
    summary_id: "LAN/WAN perusahaan, nirkabel, firewall dan akses zero-trust.",
  },
  SolutionArea {
    name: "Cloud Solutions",
    name_id: "Solusi Cloud",
    summary: "Migration, hybrid cloud and private cloud platforms.",
    summary_id: "Migrasi, hybrid cloud dan platform private cloud.",
  },
  SolutionArea {
    name: "Internet of Things (IoT)",
    name_id: "Internet of Things (IoT)",
    summary: "Sensors, gateways and dashboards for connected operations.",
    summary_id: "Sensor, gateway dan dasbor untuk operasional yang terhubung.",
  },
  SolutionArea {
    name: "Collaboration Systems",
    name_id: "Sistem Kolaborasi",
    summary: "Meeting rooms, unified communications and audio-visual integration.",
    summary_id: "Ruang rapat, komunikasi terpadu dan integrasi audio-visual.",
  },
  SolutionArea {
    name: "Managed Services",
    name_id: "Layanan Terkelola",
    summary: "Monitoring, helpdesk and on-site support under service-level agreements.",
    summary_id: "Pemantauan, helpdesk dan dukungan di lokasi dengan perjanjian tingkat layanan.",
  },
];

pub fn find_by_slug(slug: &str) -> Option<&'static SolutionArea> {
  SOLUTION_AREAS.iter().find(|area| area.slug() == slug)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slugs_are_unique_and_url_safe() {
    let mut slugs: Vec<String> = SOLUTION_AREAS.iter().map(SolutionArea::slug).collect();
    assert!(slugs.iter().all(|s| s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')));
    slugs.sort();
    slugs.dedup();
    assert_eq!(slugs.len(), SOLUTION_AREAS.len());
  }

  #[test]
  fn lookup_by_derived_slug() {
    let area = find_by_slug("network-and-security").unwrap();
    assert_eq!(area.title(Locale::Id), "Jaringan & Keamanan");
    assert!(find_by_slug("internet-of-things-iot").is_some());
    assert!(find_by_slug("nope").is_none());
  }
}
