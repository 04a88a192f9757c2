//! The native plugin page template.
//!
//! Lays out the plugin's title, table of contents and markdown body, followed by
//! up to four optional sections. Each optional section is rendered only when the
//! page carries the data it needs, and every section except the repository
//! promo also adds an entry to the table of contents.

use crate::error::RenderError;
use crate::renderer::{PackageIdPolicy, PageRenderer};
use docpage_markdown::AnchorSet;
use docpage_markup::MarkupNode;
use docpage_template_dsl::builders::*;
use docpage_template_dsl::{
    Attributed, anchored_h2, button, command_line, command_prompt, h1, h2, icons, outbound_link,
    render as build, shadow_card, tab, table_of_contents, tabs,
};
use docpage_types::{HeadingEntry, Page};
use log::{debug, warn};

const SALES_URL: &str =
    "https://ionicframework.com/sales?product_of_interest=Ionic%20Enterprise%20Engine";
const ENTERPRISE_DOCS_URL: &str = "/docs/native#enterprise-edition";
const CORDOVA_BOT_IMAGE: &str = "/docs/assets/icons/native-cordova-bot.png";
const ENTERPRISE_SCOPE: &str = "@ionic-enterprise";

/// Ids of the optional section headings. Headings in the body or usage text
/// never take these.
const SECTION_IDS: [&str; 3] = ["installation", "platforms", "usage"];

pub fn render(renderer: &PageRenderer, page: &Page) -> Result<MarkupNode, RenderError> {
    let mut headings = page.headings.clone();
    let mut anchors = AnchorSet::with_reserved(SECTION_IDS);
    let body = renderer.to_hypertext_with_anchors(&page.body, &mut anchors)?;

    let repo = render_repo(page.repo());
    let installation = render_installation(
        page.cordova(),
        page.package(),
        renderer.package_id_policy(),
    )?;
    let platforms = render_platforms(&page.platforms);
    let usage = render_usage(renderer, page.code_usage(), &mut anchors)?;

    if installation.is_some() {
        headings.push(HeadingEntry::new("Installation", "#installation"));
    }
    if platforms.is_some() {
        headings.push(HeadingEntry::new("Supported Platforms", "#platforms"));
    }
    if usage.is_some() {
        headings.push(HeadingEntry::new("Usage", "#usage"));
    }

    debug!(
        "Rendering '{}': repo={} installation={} platforms={} usage={}",
        page.title,
        repo.is_some(),
        installation.is_some(),
        platforms.is_some(),
        usage.is_some()
    );

    Ok(build(
        Article::new()
            .child(h1(&page.title))
            .child(table_of_contents(&headings, &page.path))
            .child(Section::new().class("markdown-content").children(body))
            .maybe_child(repo)
            .maybe_child(installation)
            .maybe_child(platforms)
            .maybe_child(usage),
    ))
}

fn render_repo(repo: Option<&str>) -> Option<Section> {
    let repo = repo?;

    let card = shadow_card("Don't waste precious time on plugin issues.", SALES_URL)
        .class("cordova-ee-card")
        .child(
            Div::new()
                .child(Image::new(CORDOVA_BOT_IMAGE).class("cordova-ee-img"))
                .child(Paragraph::new().text(
                    "If you're building a serious project, you can't afford to spend hours \
                     troubleshooting. Ionic's experts offer official maintenance, support, \
                     and integration help.",
                ))
                .child(
                    button(SALES_URL)
                        .class("native-ee-detail")
                        .text("Contact Us Today!"),
                ),
        );

    Some(
        Section::new()
            .flag("hidden")
            .child(
                outbound_link(repo)
                    .child(icons::git_branch())
                    .text(" ")
                    .text(repo),
            )
            .child(h2("Stuck on a Cordova issue?"))
            .child(card),
    )
}

fn render_installation(
    cordova: Option<&str>,
    package: Option<&str>,
    policy: PackageIdPolicy,
) -> Result<Option<Section>, RenderError> {
    let (Some(cordova), Some(package)) = (cordova, package) else {
        return Ok(None);
    };
    let name = enterprise_package_name(package, policy)?;

    let community = tab("Community").child(
        command_line()
            .slot("Community")
            .child(command_prompt(&format!("ionic cordova plugin add {cordova}")))
            .child(command_prompt(&format!("npm install {package}"))),
    );

    let enterprise = tab("Enterprise")
        .child(
            Blockquote::new()
                .text("Ionic EE comes with fully supported and maintained plugins from the Ionic Team. ")
                .child(Hyperlink::new(ENTERPRISE_DOCS_URL).class("btn").text("Learn More"))
                .text(" or ")
                .child(Hyperlink::new(SALES_URL).class("btn").text("Contact Us")),
        )
        .child(
            command_line()
                .child(command_prompt("ionic enterprise register --key=YOURPRODUCTKEY"))
                .child(command_prompt(&format!(
                    "npm install {ENTERPRISE_SCOPE}/{name}"
                ))),
        );

    Ok(Some(
        Section::new()
            .child(anchored_h2("installation", "Installation"))
            .child(tabs().child(community).child(enterprise)),
    ))
}

/// The package name published under the enterprise scope: the segment after the
/// first `/` of a `scope/name` identifier.
fn enterprise_package_name(package: &str, policy: PackageIdPolicy) -> Result<&str, RenderError> {
    match package.split('/').nth(1).filter(|name| !name.is_empty()) {
        Some(name) => Ok(name),
        None => match policy {
            PackageIdPolicy::FallbackToFullId => {
                warn!(
                    "Package identifier '{}' has no scope separator, using it as the enterprise package name",
                    package
                );
                match package.trim_end_matches('/') {
                    "" => Ok(package),
                    trimmed => Ok(trimmed),
                }
            }
            PackageIdPolicy::Reject => Err(RenderError::InvalidPackageId(package.to_string())),
        },
    }
}

fn render_platforms(platforms: &[String]) -> Option<Section> {
    if platforms.is_empty() {
        return None;
    }

    Some(
        Section::new()
            .child(anchored_h2("platforms", "Supported Platforms"))
            .child(
                UnorderedList::new()
                    .items(platforms.iter().map(|platform| ListItem::text_item(platform))),
            ),
    )
}

fn render_usage(
    renderer: &PageRenderer,
    usage: Option<&str>,
    anchors: &mut AnchorSet,
) -> Result<Option<Section>, RenderError> {
    let Some(usage) = usage else {
        return Ok(None);
    };

    Ok(Some(
        Section::new()
            .child(anchored_h2("usage", "Usage"))
            .children(renderer.to_hypertext_with_anchors(usage, anchors)?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enterprise_name_is_second_segment() {
        let policy = PackageIdPolicy::FallbackToFullId;
        assert_eq!(enterprise_package_name("@ionic-native/camera", policy).unwrap(), "camera");
        assert_eq!(enterprise_package_name("a/b/c", policy).unwrap(), "b");
    }

    #[test]
    fn missing_separator_falls_back_or_rejects() {
        assert_eq!(
            enterprise_package_name("noSlash", PackageIdPolicy::FallbackToFullId).unwrap(),
            "noSlash"
        );
        assert_eq!(
            enterprise_package_name("scope/", PackageIdPolicy::FallbackToFullId).unwrap(),
            "scope"
        );
        assert_eq!(
            enterprise_package_name("/", PackageIdPolicy::FallbackToFullId).unwrap(),
            "/"
        );
        assert!(matches!(
            enterprise_package_name("noSlash", PackageIdPolicy::Reject),
            Err(RenderError::InvalidPackageId(id)) if id == "noSlash"
        ));
    }

    #[test]
    fn installation_requires_both_identifiers() {
        let policy = PackageIdPolicy::default();
        assert!(render_installation(Some("cordova-plugin-x"), None, policy).unwrap().is_none());
        assert!(render_installation(None, Some("@ionic-native/x"), policy).unwrap().is_none());
        assert!(
            render_installation(Some("cordova-plugin-x"), Some("@ionic-native/x"), policy)
                .unwrap()
                .is_some()
        );
    }

    #[test]
    fn rejected_package_only_matters_when_installation_renders() {
        let policy = PackageIdPolicy::Reject;
        assert!(render_installation(None, Some("noSlash"), policy).unwrap().is_none());
        assert!(render_installation(Some("cordova-plugin-x"), Some("noSlash"), policy).is_err());
    }

    #[test]
    fn empty_platforms_render_nothing() {
        assert!(render_platforms(&[]).is_none());
        assert!(render_repo(None).is_none());
    }
}
