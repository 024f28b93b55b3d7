use leptos::prelude::*;
use leptos_router::components::A;

use super::components::{
    AchievementCard, Brand, CertificationCard, PrimaryButton, ProjectCard, Section, ServiceCard,
    SkillBar, SocialButton, StatTile, CARD,
};
use super::reveal::{Entrance, RevealOnScroll};
use crate::content::{copyright_year, image_or_placeholder, Icon, Portfolio};

const ALT_BACKGROUND: &str = "bg-gray-50/50 dark:bg-gray-800/50";

#[component]
pub fn About(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    let portrait = image_or_placeholder(profile.about_image.as_deref());

    view! {
        <Section id="about" title="About Me" subtitle="My Introduction">
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <RevealOnScroll
                    from=Entrance::Left
                    class="relative h-80 md:h-full rounded-2xl overflow-hidden"
                >
                    <div class="relative w-full h-full">
                        <img src=portrait alt="Profile" class="w-full h-full object-cover" />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/40 to-transparent" />
                        <div class="absolute bottom-0 left-0 right-0 p-6">
                            <div class="flex gap-4">
                                {portfolio
                                    .socials
                                    .iter()
                                    .cloned()
                                    .map(|link| view! { <SocialButton link overlay=true /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </RevealOnScroll>
                <RevealOnScroll from=Entrance::Right>
                    <h3 class="text-2xl font-bold mb-4">{profile.about_heading.clone()}</h3>
                    {profile
                        .about
                        .iter()
                        .map(|p| {
                            view! {
                                <p class="text-gray-600 dark:text-gray-400 mb-6 leading-relaxed">
                                    {p.clone()}
                                </p>
                            }
                        })
                        .collect_view()}
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 mb-8">
                        {portfolio
                            .stats
                            .iter()
                            .cloned()
                            .map(|stat| view! { <StatTile stat /> })
                            .collect_view()}
                    </div>
                    <PrimaryButton
                        href=profile.cv_path.clone()
                        label="Download CV"
                        icon=Icon::Arrow
                        download=true
                    />
                </RevealOnScroll>
            </div>
        </Section>
    }
}

#[component]
pub fn Skills(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <Section
            id="skills"
            title="My Skills"
            subtitle="Technical Proficiency"
            class=ALT_BACKGROUND
        >
            <div class="grid md:grid-cols-2 gap-12">
                <RevealOnScroll>
                    <h3 class="text-2xl font-bold mb-6">"Technical Skills"</h3>
                    <div class="space-y-6">
                        {portfolio
                            .skills
                            .iter()
                            .cloned()
                            .map(|skill| view! { <SkillBar skill /> })
                            .collect_view()}
                    </div>
                </RevealOnScroll>
                <div>
                    <h3 class="text-2xl font-bold mb-6">"What I Offer"</h3>
                    <div class="grid gap-6">
                        {portfolio
                            .services
                            .iter()
                            .cloned()
                            .map(|service| view! { <ServiceCard service /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn Projects(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <Section id="projects" title="My Projects" subtitle="Recent Work">
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {portfolio
                    .projects
                    .iter()
                    .cloned()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn Education(portfolio: &'static Portfolio) -> impl IntoView {
    let edu = &portfolio.education;

    view! {
        <Section
            id="education"
            title="Education & Achievements"
            subtitle="Academic Background"
            class=ALT_BACKGROUND
        >
            <div class="grid md:grid-cols-2 gap-12">
                <RevealOnScroll from=Entrance::Left>
                    <div class=format!("{CARD} rounded-xl p-6")>
                        <div class="flex items-start gap-4 mb-6">
                            <div class="p-3 rounded-lg bg-gradient-to-br from-teal-500 to-purple-600 text-white text-2xl">
                                <i class=Icon::School.class() />
                            </div>
                            <div>
                                <h3 class="text-xl font-bold">{edu.degree.clone()}</h3>
                                <p class="text-gray-600 dark:text-gray-400">{edu.field.clone()}</p>
                                <p class="text-gray-500 text-sm mt-1">{edu.period.clone()}</p>
                            </div>
                        </div>
                        <div>
                            <h4 class="font-medium mb-2">{edu.institution.clone()}</h4>
                            <p class="text-gray-600 dark:text-gray-400 mb-4">{edu.location.clone()}</p>
                            <div class="flex items-center gap-2 text-teal-500 dark:text-teal-400">
                                <span class="font-bold">{edu.grade.clone()}</span>
                            </div>
                        </div>
                    </div>

                    <h3 class="text-2xl font-bold mt-12 mb-6">"Certifications"</h3>
                    <div class="space-y-4">
                        {portfolio
                            .certifications
                            .iter()
                            .cloned()
                            .map(|certification| view! { <CertificationCard certification /> })
                            .collect_view()}
                    </div>
                </RevealOnScroll>

                <RevealOnScroll from=Entrance::Right>
                    <h3 class="text-2xl font-bold mb-6">"Experience"</h3>
                    {portfolio
                        .experience
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class=format!("{CARD} rounded-xl p-6 mb-8")>
                                    <div class="flex items-start gap-4 mb-4">
                                        <div class="p-3 rounded-lg bg-gradient-to-br from-purple-500 to-teal-500 text-white text-2xl">
                                            <i class=Icon::Brain.class() />
                                        </div>
                                        <div>
                                            <h3 class="text-xl font-bold">{exp.role.clone()}</h3>
                                            <p class="text-gray-600 dark:text-gray-400">
                                                {exp.organization.clone()}
                                            </p>
                                            <p class="text-gray-500 text-sm mt-1">{exp.period.clone()}</p>
                                        </div>
                                    </div>
                                    <p class="text-gray-600 dark:text-gray-400">{exp.summary.clone()}</p>
                                </div>
                            }
                        })
                        .collect_view()}

                    <h3 class="text-2xl font-bold mb-6">"Achievements"</h3>
                    <div class="space-y-4">
                        {portfolio
                            .achievements
                            .iter()
                            .cloned()
                            .map(|achievement| view! { <AchievementCard achievement /> })
                            .collect_view()}
                    </div>
                </RevealOnScroll>
            </div>
        </Section>
    }
}

#[component]
pub fn Footer(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;

    view! {
        <footer class="py-12 border-t border-gray-200 dark:border-gray-800 relative overflow-hidden">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-8 md:mb-0">
                        <A href="/" attr:class="text-xl font-bold flex items-center gap-2">
                            <Brand initial=profile.initial.clone() name=profile.name.clone() />
                        </A>
                        <p class="text-sm text-gray-600 dark:text-gray-400 mt-2 max-w-md">
                            {profile.blurb.clone()}
                        </p>
                    </div>
                    <div class="flex flex-col items-center md:items-end">
                        <div class="flex gap-4 mb-4">
                            {portfolio
                                .socials
                                .iter()
                                .cloned()
                                .map(|link| view! { <SocialButton link /> })
                                .collect_view()}
                        </div>
                        <p class="text-sm text-gray-600 dark:text-gray-400">
                            {format!(
                                "© {} {}. All rights reserved.",
                                copyright_year(),
                                profile.full_name,
                            )}
                        </p>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-0 left-0 w-full h-1 bg-gradient-to-r from-teal-500 via-purple-500 to-teal-500" />
        </footer>
    }
}
