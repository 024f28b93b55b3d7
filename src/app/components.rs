use leptos::{either::Either, html, prelude::*};
use leptos_router::components::A;

use super::reveal::{use_reveal, RevealOnScroll};
use crate::content::{
    Achievement, Certification, ContactChannel, Icon, LinkTarget, Project, Service, Skill,
    SocialLink, Stat,
};
use crate::state::SECTION_THRESHOLD;

pub const GRADIENT_TEXT: &str =
    "bg-clip-text text-transparent bg-gradient-to-r from-teal-500 to-purple-600";
pub const CARD: &str =
    "bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 shadow-sm";

/// Titled page section whose header animates in once a fifth of it is visible.
#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let reveal = use_reveal(node, SECTION_THRESHOLD);
    let state = move || reveal.get().class();

    view! {
        <section id=id class=format!("py-24 relative {class}")>
            <div node_ref=node class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class=move || format!("reveal enter-up {} max-w-3xl mx-auto text-center mb-16", state())>
                    <div class=move || format!("reveal enter-up delay-100 {}", state())>
                        <span class="px-4 py-1.5 text-sm font-medium rounded-full bg-gradient-to-r from-teal-500/10 to-purple-500/10 text-teal-500 dark:text-teal-400 border border-teal-500/20">
                            {subtitle}
                        </span>
                    </div>
                    <h2 class=move || format!("reveal enter-up delay-200 {} text-3xl md:text-4xl font-bold mt-4", state())>
                        {title}
                    </h2>
                    <div class=move || {
                        format!(
                            "reveal-bar {} w-20 h-1 bg-gradient-to-r from-teal-500 to-purple-600 mx-auto mt-4 rounded-full",
                            state(),
                        )
                    } />
                </div>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn Brand(#[prop(into)] initial: String, #[prop(into)] name: String) -> impl IntoView {
    view! {
        <span class="flex items-center justify-center w-8 h-8 rounded-lg bg-gradient-to-br from-teal-400 to-purple-500 text-white transition-transform hover:rotate-6 hover:scale-110">
            {initial}
        </span>
        <span class=format!("{GRADIENT_TEXT} font-extrabold")>{name}</span>
    }
}

#[component]
pub fn StatTile(stat: Stat) -> impl IntoView {
    view! {
        <div class=format!(
            "{CARD} px-6 py-4 rounded-lg transition-all hover:-translate-y-1 hover:shadow-xl",
        )>
            <div class=format!("text-2xl font-bold {GRADIENT_TEXT} flex items-center gap-2")>
                {stat.value}
                <span class="text-gray-900 dark:text-gray-100">{stat.icon}</span>
            </div>
            <div class="text-sm text-gray-600 dark:text-gray-400">{stat.label}</div>
        </div>
    }
}

/// Label, percentage and a bar that fills to the percentage once revealed.
#[component]
pub fn SkillBar(skill: Skill) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let reveal = use_reveal(node, 0.0);
    let percentage = skill.percentage.min(100);

    view! {
        <div node_ref=node class=move || format!("reveal enter-up {}", reveal.get().class())>
            <div class="flex justify-between mb-2">
                <span class="font-medium">{skill.label}</span>
                <span class="font-medium text-teal-500">{format!("{percentage}%")}</span>
            </div>
            <div class="h-3 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-teal-500 to-purple-600 rounded-full transition-[width] duration-1000 ease-out"
                    style:width=move || {
                        if reveal.get().is_seen() { format!("{percentage}%") } else { "0%".to_string() }
                    }
                />
            </div>
        </div>
    }
}

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <RevealOnScroll class=format!(
            "{CARD} p-6 rounded-xl relative overflow-hidden group transition-transform hover:-translate-y-1",
        )>
            <div class="absolute top-0 left-0 w-2 h-full bg-gradient-to-b from-teal-500 to-purple-600 transition-all duration-300 group-hover:w-full group-hover:opacity-10" />
            <div class="text-teal-500 mb-4 relative z-10 text-2xl">
                <i class=service.icon.class() />
            </div>
            <h3 class="text-xl font-bold mb-2 relative z-10">{service.title}</h3>
            <p class="text-gray-600 dark:text-gray-400 relative z-10">{service.description}</p>
        </RevealOnScroll>
    }
}

#[component]
fn CardLink(link: LinkTarget, label: &'static str, icon: Icon) -> impl IntoView {
    let inert = link.is_inert();
    let class = if inert {
        "text-gray-400 dark:text-gray-600 cursor-not-allowed flex items-center gap-1 text-sm font-medium"
    } else {
        "text-teal-500 hover:text-teal-600 dark:hover:text-teal-400 flex items-center gap-1 text-sm font-medium transition-transform hover:-translate-y-0.5"
    };
    view! {
        <a
            href=link.href()
            target=link.target()
            rel=link.rel()
            aria-disabled=inert.then_some("true")
            class=class
            on:click=move |ev| {
                if inert {
                    ev.prevent_default();
                }
            }
        >
            {label}
            <i class=icon.class() />
        </a>
    }
}

/// Project tile. The source-code link is always present (inert without a
/// repository); the demo link only when there is a demo.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let demo = project.demo_link();
    let source = project.source_link();
    let image = project.image_src().to_string();

    view! {
        <RevealOnScroll class=format!(
            "{CARD} rounded-xl overflow-hidden group transition-transform duration-300 hover:-translate-y-2",
        )>
            <div class="relative h-48 overflow-hidden">
                <img
                    src=image
                    alt=project.title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-black/0 to-black/0 opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                <div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="px-4 py-2 bg-white/90 dark:bg-gray-900/90 backdrop-blur-sm rounded-lg text-sm font-medium translate-y-5 group-hover:translate-y-0 transition-transform">
                        "View Project"
                    </div>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2 group-hover:text-teal-500 dark:group-hover:text-teal-400 transition-colors">
                    {project.title}
                </h3>
                <p class="text-gray-600 dark:text-gray-400 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 bg-gradient-to-r from-teal-500/10 to-purple-500/10 text-teal-600 dark:text-teal-400 text-xs rounded-full border border-teal-500/20">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    {demo
                        .map(|link| {
                            view! { <CardLink link label="Live Demo" icon=Icon::External /> }
                        })}
                    <CardLink link=source label="Source Code" icon=Icon::Github />
                </div>
            </div>
        </RevealOnScroll>
    }
}

/// Icon tile plus heading and one line of detail; shared by the contact,
/// certification and achievement lists.
#[component]
pub fn InfoCard(
    icon: Icon,
    #[prop(into)] title: String,
    #[prop(into)] detail: String,
    #[prop(default = "from-teal-500 to-purple-600".to_string(), into)] gradient: String,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{CARD} flex items-start gap-4 p-4 rounded-xl transition-transform hover:translate-x-1",
        )>
            <div class=format!("p-3 rounded-lg bg-gradient-to-br {gradient} text-white text-xl")>
                <i class=icon.class() />
            </div>
            <div>
                <h4 class="font-medium">{title}</h4>
                <p class="text-gray-600 dark:text-gray-400">{detail}</p>
            </div>
        </div>
    }
}

#[component]
pub fn CertificationCard(certification: Certification) -> impl IntoView {
    view! { <InfoCard icon=Icon::File title=certification.title detail=certification.issuer /> }
}

#[component]
pub fn AchievementCard(achievement: Achievement) -> impl IntoView {
    view! {
        <InfoCard
            icon=Icon::Award
            title=achievement.title
            detail=achievement.description
            gradient="from-purple-500 to-teal-500"
        />
    }
}

#[component]
pub fn ContactCard(channel: ContactChannel) -> impl IntoView {
    view! {
        <InfoCard
            icon=channel.icon
            title=channel.label
            detail=channel.value
            gradient=channel.gradient
        />
    }
}

/// Round social button. `overlay` is the translucent variant drawn over the
/// portrait in the about section.
#[component]
pub fn SocialButton(link: SocialLink, #[prop(optional)] overlay: bool) -> impl IntoView {
    let target = link.target();
    let class = if overlay {
        "w-10 h-10 bg-white/20 backdrop-blur-md rounded-full flex items-center justify-center text-white hover:bg-white/30 transition-all hover:-translate-y-1"
    } else {
        "flex items-center justify-center w-10 h-10 bg-gray-200 dark:bg-gray-800 text-gray-700 dark:text-gray-300 rounded-full hover:bg-gradient-to-r hover:from-teal-500 hover:to-purple-600 hover:text-white transition-all hover:-translate-y-1"
    };
    view! {
        <a
            href=target.href()
            target=target.target()
            rel=target.rel()
            aria-label=link.label
            class=class
        >
            <i class=link.icon.class() />
        </a>
    }
}

fn tech_icon_class(name: &str) -> &'static str {
    match name {
        "React" => "devicon-react-original colored",
        "Node.js" => "devicon-nodejs-plain colored",
        "Python" => "devicon-python-plain colored",
        "MongoDB" => "devicon-mongodb-plain colored",
        "Tailwind" => "devicon-tailwindcss-original colored",
        _ => "extra-code",
    }
}

#[component]
pub fn TechIcon(#[prop(into)] name: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center transition-transform hover:-translate-y-1">
            <div class="w-12 h-12 bg-white dark:bg-gray-800 rounded-lg shadow-md flex items-center justify-center mb-2 text-3xl">
                <i class=tech_icon_class(&name) />
            </div>
            <span class="text-xs font-medium">{name}</span>
        </div>
    }
}

/// Gradient call-to-action. In-page anchors go through the router link,
/// downloads and external files through a plain anchor.
#[component]
pub fn PrimaryButton(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    icon: Icon,
    #[prop(optional)] download: bool,
) -> impl IntoView {
    let class = "inline-flex items-center justify-center gap-2 px-6 py-3 bg-gradient-to-r from-teal-500 to-purple-600 hover:from-teal-600 hover:to-purple-700 text-white rounded-lg font-medium transition-all shadow-lg shadow-purple-500/20 hover:scale-105 active:scale-95";
    if download {
        Either::Left(view! {
            <a href=href download="" class=class>
                {label}
                <i class=icon.class() />
            </a>
        })
    } else {
        Either::Right(view! {
            <A href=href attr:class=class>
                {label}
                <i class=icon.class() />
            </A>
        })
    }
}

#[component]
pub fn SecondaryButton(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    icon: Icon,
) -> impl IntoView {
    view! {
        <A
            href=href
            attr:class="inline-flex items-center justify-center gap-2 px-6 py-3 border border-gray-300 dark:border-gray-700 hover:bg-gray-100 dark:hover:bg-gray-800 rounded-lg font-medium transition-all hover:scale-105 active:scale-95"
        >
            {label}
            <i class=icon.class() />
        </A>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::PLACEHOLDER_IMAGE;

    fn project(github_url: &str, demo_url: Option<&str>) -> Project {
        Project {
            title: "Shop".to_string(),
            description: "Storefront".to_string(),
            tags: vec!["React".to_string()],
            image: None,
            github_url: Some(github_url.to_string()),
            demo_url: demo_url.map(String::from),
        }
    }

    fn render(project: Project) -> String {
        Owner::new().with(|| view! { <ProjectCard project /> }.to_html())
    }

    #[test]
    fn test_project_without_urls_renders_one_inert_link() {
        let html = render(project("", None));
        assert_eq!(html.matches("<a").count(), 1);
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("aria-disabled=\"true\""));
        assert!(html.contains("Source Code"));
        assert!(!html.contains("Live Demo"));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_project_with_urls_renders_external_links() {
        let html = render(project(
            "https://github.com/example/shop",
            Some("https://shop.example.com"),
        ));
        assert_eq!(html.matches("<a").count(), 2);
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
        assert!(html.contains("href=\"https://shop.example.com\""));
        assert!(!html.contains("aria-disabled"));
        assert!(html.contains(PLACEHOLDER_IMAGE));
    }
}
