use crate::search::models::{NON_NAVIGABLE_URL, SearchResult};

pub const UNAVAILABLE_TITLE: &str = "Search Service Temporarily Unavailable";
pub const PRIVACY_PROTECTED_TITLE: &str = "Privacy Protected Search";

/// The two entries shown whenever the backend cannot be reached.
pub fn fallback_results() -> Vec<SearchResult> {
    vec![
        SearchResult::new(
            UNAVAILABLE_TITLE,
            NON_NAVIGABLE_URL,
            "We're experiencing technical difficulties. Your privacy remains protected. Please try again in a moment.",
            &["system", "privacy"],
        ),
        SearchResult::new(
            PRIVACY_PROTECTED_TITLE,
            NON_NAVIGABLE_URL,
            "Even when errors occur, your search queries are not logged or tracked. We prioritize your privacy above all else.",
            &["privacy", "security"],
        ),
    ]
}

/// Shared cybersecurity dataset used by offline mode and by tests.
pub fn canned_results() -> Vec<SearchResult> {
    vec![
        SearchResult::new(
            "Cybersecurity Best Practices - NIST Framework",
            "https://nist.gov/cybersecurity-framework",
            "The National Institute of Standards and Technology (NIST) Cybersecurity Framework helps organizations manage and reduce cybersecurity risks through proven security practices and controls.",
            &["cybersecurity", "framework", "nist", "standards"],
        ),
        SearchResult::new(
            "OWASP Top 10 Security Vulnerabilities 2024",
            "https://owasp.org/top10/",
            "The OWASP Top 10 is a standard awareness document representing a broad consensus about the most critical security risks to web applications and APIs.",
            &["owasp", "vulnerabilities", "web security", "api security"],
        ),
        SearchResult::new(
            "Kali Linux Official Documentation",
            "https://kali.org/docs/",
            "Kali Linux is a Debian-derived Linux distribution designed for digital forensics and penetration testing. Learn how to use Kali tools for ethical hacking.",
            &["kali linux", "penetration testing", "ethical hacking", "security tools"],
        ),
        SearchResult::new(
            "Privacy Tools and Encrypted Communication",
            "https://privacytools.io/",
            "Privacy Tools provides services, tools and knowledge to protect your privacy against global mass surveillance. Secure communication and anonymous browsing guides.",
            &["privacy", "encryption", "anonymous browsing", "security tools"],
        ),
        SearchResult::new(
            "Threat Intelligence and Cyber Threat Hunting",
            "https://threatintel.org/",
            "Advanced threat intelligence techniques and cyber threat hunting methodologies. Learn how to proactively search for cybersecurity threats in your environment.",
            &["threat intelligence", "threat hunting", "cybersecurity", "analysis"],
        ),
        SearchResult::new(
            "Zero Trust Security Architecture Guide",
            "https://zerotrust-guide.com/",
            "Zero Trust is a security concept centered on the belief that organizations should not automatically trust anything inside or outside its perimeters.",
            &["zero trust", "security architecture", "network security", "access control"],
        ),
        SearchResult::new(
            "Incident Response and Digital Forensics",
            "https://incident-response.org/",
            "Comprehensive guide to incident response procedures and digital forensics techniques for cybersecurity professionals and security operations centers.",
            &["incident response", "digital forensics", "security operations", "investigation"],
        ),
        SearchResult::new(
            "Secure Coding Practices and Application Security",
            "https://secure-coding.dev/",
            "Learn secure coding practices to prevent vulnerabilities in applications. Covers secure development lifecycle and application security testing methodologies.",
            &["secure coding", "application security", "development", "vulnerability prevention"],
        ),
        SearchResult::new(
            "Network Security Monitoring and Analysis",
            "https://network-security-monitoring.com/",
            "Network security monitoring techniques using tools like Wireshark, Snort, and Suricata. Learn how to detect and analyze network-based attacks.",
            &["network security", "monitoring", "analysis", "intrusion detection"],
        ),
        SearchResult::new(
            "Cloud Security Best Practices and Compliance",
            "https://cloud-security-guide.com/",
            "Comprehensive guide to securing cloud environments including AWS, Azure, and GCP. Covers compliance frameworks and cloud security architecture.",
            &["cloud security", "aws", "azure", "compliance"],
        ),
        SearchResult::new(
            "Malware Analysis and Reverse Engineering",
            "https://malware-analysis.org/",
            "Advanced malware analysis techniques and reverse engineering methodologies. Learn to analyze malicious software using static and dynamic analysis.",
            &["malware analysis", "reverse engineering", "security research", "threat analysis"],
        ),
        SearchResult::new(
            "DuckDuckGo Privacy Search Engine",
            "https://duckduckgo.com/",
            "DuckDuckGo is a privacy-focused search engine that doesn't track users or store personal information. Search the web anonymously.",
            &["privacy", "search engine", "anonymous", "no tracking"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_entries_are_fixed() {
        let fallback = fallback_results();
        assert_eq!(fallback.len(), 2);
        assert_eq!(fallback[0].title, UNAVAILABLE_TITLE);
        assert_eq!(fallback[1].title, PRIVACY_PROTECTED_TITLE);
        assert!(fallback.iter().all(|r| !r.is_navigable()));
        assert!(fallback.iter().all(|r| !r.tags().is_empty()));
    }

    #[test]
    fn test_canned_results_are_navigable() {
        let canned = canned_results();
        assert_eq!(canned.len(), 12);
        assert!(canned.iter().all(|r| r.is_navigable()));
        assert!(canned.iter().all(|r| r.tags().len() == 4));
    }
}
