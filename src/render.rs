use maud::{html, Markup, DOCTYPE};

use crate::constants::{Environment, UNDEPLOYED_ID};
use crate::models::PortfolioRecord;
use crate::network::Network;
use crate::state::PageSnapshot;

/// Written next to the pages; see `STYLESHEET`.
pub const STYLESHEET_FILE: &str = "style.css";
pub const STYLESHEET: &str = include_str!("style.css");

const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const ROLE_TITLE: &str =
    "DEVCON Manila President | Full Stack Developer - Data Science & Blockchain | UI/UX Designer";
const EMAIL: &str = "pmanucom@devcon.ph";
const AVATAR_FALLBACK: &str = "https://via.placeholder.com/180x180?text=PGM";

struct Achievement {
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
}

const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { icon: "fa-solid fa-medal", title: "Top 3", detail: " - Overall in Batch 2020-2022 (TNHS)" },
    Achievement { icon: "fa-solid fa-graduation-cap", title: "DOST Scholar", detail: " - RA 7687" },
    Achievement { icon: "fa-solid fa-award", title: "AWS Certified", detail: " - Cloud Practitioner" },
    Achievement { icon: "fa-solid fa-certificate", title: "DataCamp Scholar", detail: "" },
    Achievement { icon: "fa-brands fa-google", title: "GCP INAS Completer", detail: " - Tier 1" },
];

struct Experience {
    icon: &'static str,
    color: &'static str,
    org: &'static str,
    role: &'static str,
    description: &'static str,
}

const EXPERIENCE: &[Experience] = &[
    Experience {
        icon: "fa-solid fa-users",
        color: "#60A5FA",
        org: "DEVCON Manila",
        role: "President",
        description: "Leading initiatives to foster collaboration, innovation, and inclusive tech growth",
    },
    Experience {
        icon: "fa-brands fa-aws",
        color: "#FF9900",
        org: "AWS Cloud Club PUP",
        role: "Former COO & Director of Programs",
        description: "First AWS Club in the Philippines, managed programs and operations",
    },
    Experience {
        icon: "fa-brands fa-aws",
        color: "#FF9900",
        org: "AWSUG BuildHers+ PH",
        role: "Former Ambassador",
        description: "Promoted AWS community initiatives and bridged the gender gap in tech",
    },
    Experience {
        icon: "fa-solid fa-chart-line",
        color: "#34D399",
        org: "GDSC PUP Main",
        role: "Former Data Science Fellow Lead",
        description: "Led data science initiatives and ML projects",
    },
    Experience {
        icon: "fa-solid fa-hand-holding-heart",
        color: "#A78BFA",
        org: "PUP Sandiwa",
        role: "Former Executive Auditor",
        description: "CCIS Representative, handled transparency and audits",
    },
    Experience {
        icon: "fa-solid fa-flask",
        color: "#F472B6",
        org: "DOST",
        role: "Former Lodi Intern",
        description: "Contributed to science and technology initiatives",
    },
    Experience {
        icon: "fa-solid fa-code",
        color: "#22D3EE",
        org: "Tutorials Dojo",
        role: "Former Intern Developer",
        description: "Developed educational content and technical solutions",
    },
    Experience {
        icon: "fa-solid fa-users-gear",
        color: "#A855F7",
        org: "PUP ASCII",
        role: "Former Member",
        description: "Association of Students for Computer Intelligence Integration",
    },
    Experience {
        icon: "fa-solid fa-rainbow",
        color: "#EC4899",
        org: "ARK - AcademiTech Research and Knowledge",
        role: "UI/UX Head",
        description: "Coordinates the work of designers and developers to deliver functional interfaces to clients.",
    },
];

const MOVE_BLURB: &str = "Move smart contracts are programs written in the Move language and \
deployed on blockchains like Sui, enabling secure asset management and high scalability. As a \
secure and efficient language designed for apps that scale, Move ushers in a new era of smart \
contract programming by offering significant advancements in security and productivity. Move \
drastically reduces the Web3 learning curve and enables a developer experience of unprecedented \
ease, serving as the foundation for Sui, a high-performance Layer 1 blockchain that utilizes an \
object-centric data model to achieve industry-leading transaction speeds.";

fn page_slug(network: Network) -> String {
    network.config().display_name.to_lowercase()
}

/// File each network's page is written to, so the toggle link can point at it.
pub fn page_file_name(network: Network) -> String {
    format!("index-{}.html", page_slug(network))
}

/// Renders the whole page for `snapshot`.
pub fn render_page(snapshot: &PageSnapshot, object_id: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (snapshot.record.name) }
                link rel="stylesheet" href=(FONT_AWESOME_CSS);
                link rel="stylesheet" href=(STYLESHEET_FILE);
            }
            body {
                (network_bar(snapshot, object_id))
                (hero(&snapshot.record))
                (about(&snapshot.record))
                (move_card())
                (footer(snapshot.network))
            }
        }
    };
    markup.into_string()
}

fn network_bar(snapshot: &PageSnapshot, object_id: &str) -> Markup {
    let config = snapshot.network.config();
    html! {
        div class="network-bar" data-network=(page_slug(snapshot.network)) {
            span class="network-name" { (config.display_name) }
            " "
            a class="explorer-link" href=(config.object_url(object_id)) target="_blank" rel="noopener noreferrer" {
                "View object on explorer"
            }
            @for other in Network::all().filter(|n| *n != snapshot.network) {
                a class="network-toggle" href=(page_file_name(other)) {
                    "Switch to " (other.config().display_name)
                }
            }
            @if snapshot.loading {
                span class="loading" { "Loading…" }
            }
            @if !snapshot.notice.is_empty() {
                p class="notice" { (snapshot.notice) }
            }
        }
    }
}

fn hero(record: &PortfolioRecord) -> Markup {
    html! {
        div class="hero-wrapper" {
            div class="hero" {
                div class="avatar" {
                    img src="/profile.png" alt=(record.name) onerror=(format!("this.src='{}'", AVATAR_FALLBACK));
                }
                div class="hero-content" {
                    small { "Hello! My name is" }
                    h1 class="gradient-name" { (record.name) }
                    p { span class="degree" { (record.course) ", " (record.school) } }
                    p class="role-title" { strong { (ROLE_TITLE) } }
                    div class="socials" {
                        a href=(record.linkedin) target="_blank" rel="noopener noreferrer" {
                            i class="fa-brands fa-linkedin" {} " LinkedIn"
                        }
                        a href=(record.github) target="_blank" rel="noopener noreferrer" {
                            i class="fa-brands fa-github" {} " GitHub"
                        }
                        a href=(format!("mailto:{}", EMAIL)) rel="noopener noreferrer" {
                            i class="fa-solid fa-envelope" {} " Email"
                        }
                    }
                }
            }
        }
    }
}

fn about(record: &PortfolioRecord) -> Markup {
    html! {
        section class="solid-section" {
            h2 { "About Me" }
            p class="about" { (record.about) }
            div class="achievements" {
                @for item in ACHIEVEMENTS {
                    div class="achievement-item" {
                        i class=(item.icon) {}
                        span { strong { (item.title) } (item.detail) }
                    }
                }
            }
            h2 { "Skills & Expertise" }
            div class="skills" {
                @for skill in &record.skills {
                    div class="skill" { (skill) }
                }
            }
            h2 { "Leadership & Experience" }
            div class="experience-grid" {
                @for card in EXPERIENCE {
                    div class="experience-card" {
                        i class=(card.icon) style=(format!("color: {}", card.color)) {}
                        h3 { (card.org) }
                        p class="role" { (card.role) }
                        p class="description" { (card.description) }
                    }
                }
            }
        }
    }
}

fn move_card() -> Markup {
    html! {
        div class="move-wrapper" {
            div class="move-card" {
                div class="move-title" {
                    img src="/sui-logo.png" alt="Move Logo" class="move-logo";
                    strong { "Move Smart Contracts" }
                }
                p { (MOVE_BLURB) }
                a href="https://www.sui.io/move" target="_blank" class="learn-more-btn" rel="noopener noreferrer" {
                    "Learn More About Sui →"
                }
            }
        }
    }
}

fn footer(network: Network) -> Markup {
    let deployment = Environment::from(network).deployment();
    let explorer = network.config().explorer_url;
    html! {
        div class="custom-footer" {
            div class="footer-container" {
                div class="footer-logos" {
                    img src="/devcon.png" alt="DEVCON" class="logo-img";
                    img src="/sui.png" alt="SUI" class="logo-img";
                }
                div class="footer-text" {
                    p {
                        "Portfolio project published during "
                        strong { "Move Smart Contracts Code Camp" }
                        " by DEVCON Philippines & SUI Foundation"
                    }
                    @if deployment.is_deployed() {
                        p class="package" {
                            "Move package: "
                            a href=(format!("{}/object/{}", explorer, deployment.package_id)) target="_blank" rel="noopener noreferrer" {
                                code { (deployment.package_id) }
                            }
                        }
                    }
                    @if deployment.portfolio_id != UNDEPLOYED_ID {
                        p class="portfolio-object" { "Portfolio object: " code { (deployment.portfolio_id) } }
                    }
                    p class="copyright" { "© 2026 Precious Grace Deborah S. Manucom. All rights reserved." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn snapshot(record: PortfolioRecord) -> PageSnapshot {
        PageSnapshot {
            record,
            network: Network::Mainnet,
            loading: false,
            notice: String::new(),
        }
    }

    fn texts(doc: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        doc.select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    fn attr(doc: &Html, selector: &str, name: &str) -> Option<String> {
        let selector = Selector::parse(selector).unwrap();
        doc.select(&selector)
            .next()
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    #[test]
    fn binds_record_fields() {
        let record = PortfolioRecord {
            name: "Ada <Lovelace>".into(),
            course: "BS Math".into(),
            school: "London".into(),
            about: "First programmer.".into(),
            linkedin: "https://linkedin.example/ada".into(),
            github: "https://github.example/ada".into(),
            skills: vec!["Rust".into(), "Move".into()],
        };
        let page = render_page(&snapshot(record), "0xabc");
        assert!(page.contains("Ada &lt;Lovelace&gt;"));
        assert!(!page.contains("<Lovelace>"));

        let doc = Html::parse_document(&page);
        assert_eq!(texts(&doc, "h1.gradient-name"), vec!["Ada <Lovelace>"]);
        assert_eq!(texts(&doc, "span.degree"), vec!["BS Math, London"]);
        assert_eq!(texts(&doc, "p.about"), vec!["First programmer."]);
        assert_eq!(texts(&doc, "div.skill"), vec!["Rust", "Move"]);
        assert_eq!(
            attr(&doc, ".socials a:nth-child(2)", "href").as_deref(),
            Some("https://github.example/ada")
        );
        assert_eq!(texts(&doc, "div.experience-card").len(), EXPERIENCE.len());
    }

    #[test]
    fn shows_network_and_notice() {
        let mut page = snapshot(PortfolioRecord::default());
        page.network = Network::Testnet;
        page.loading = true;
        page.notice = "Note: Using default data (blockchain fetch failed: offline)".into();
        let doc = Html::parse_document(&render_page(&page, "0xabc"));

        assert_eq!(texts(&doc, ".network-name"), vec!["Testnet"]);
        assert_eq!(
            attr(&doc, "a.explorer-link", "href").as_deref(),
            Some("https://suiscan.xyz/testnet/object/0xabc")
        );
        assert_eq!(texts(&doc, "a.network-toggle"), vec!["Switch to Mainnet"]);
        assert_eq!(
            attr(&doc, "a.network-toggle", "href").as_deref(),
            Some("index-mainnet.html")
        );
        assert_eq!(texts(&doc, "span.loading").len(), 1);
        assert_eq!(
            texts(&doc, "p.notice"),
            vec!["Note: Using default data (blockchain fetch failed: offline)"]
        );
    }

    #[test]
    fn idle_page_has_no_loading_or_notice() {
        let doc = Html::parse_document(&render_page(&snapshot(PortfolioRecord::default()), "0xabc"));
        assert!(texts(&doc, "span.loading").is_empty());
        assert!(texts(&doc, "p.notice").is_empty());
        assert_eq!(texts(&doc, "div.skill").len(), PortfolioRecord::default().skills.len());
        assert_eq!(texts(&doc, "p.package code").len(), 1);
        // mainnet has no portfolio object yet
        assert!(texts(&doc, "p.portfolio-object").is_empty());
        assert_eq!(
            attr(&doc, "link[rel=stylesheet]:nth-of-type(2)", "href").as_deref(),
            Some(STYLESHEET_FILE)
        );
    }
}
