use yew::prelude::*;

use crate::base::Base;
use crate::components::{
    CallbackModal, Carousel, ContactFormView, NewsletterForm, Projects, ServiceEnquiryForm,
    ServiceGallery, StatCounter,
};
use crate::config::site_content;
use crate::hooks::use_reveal;
use crate::styles;

#[derive(Properties, PartialEq)]
struct SectionProps {
    id: &'static str,
    title: &'static str,
    #[prop_or(false)]
    alt: bool,
    children: Html,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id} class={if props.alt { styles::SECTION_ALT } else { styles::SECTION }}>
            <div class={styles::CONTAINER_LG}>
                <h2 class={classes!(styles::TEXT_H2, styles::REVEAL)} data-reveal="">{props.title}</h2>
                {props.children.clone()}
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_memo((), |_| site_content());
    use_reveal();

    html! {
        <Base brand={content.brand.clone()}>
            <section id="home" class="relative flex min-h-[80vh] items-center justify-center overflow-hidden isolate scroll-mt-16">
                <div class="absolute inset-0 -z-10 bg-gradient-to-b from-blue-100 to-transparent dark:from-blue-900/40" data-parallax="" aria-hidden="true" />
                <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center">
                    <h1 class={classes!(styles::TEXT_H1, styles::REVEAL)} data-reveal="">{content.brand.clone()}</h1>
                    <p class={classes!(styles::TEXT_BODY, styles::REVEAL, "text-xl")} data-reveal="" data-reveal-delay="0.2s">
                        {content.tagline.clone()}
                    </p>
                    <a href="#contact" class={classes!(styles::BUTTON_PRIMARY, styles::REVEAL, "mt-8")} data-reveal="" data-reveal-delay="0.4s">
                        {"Get a free consultation"}
                    </a>
                </div>
            </section>

            <Section id="about" title="About us" alt=true>
                <p class={classes!(styles::TEXT_BODY, styles::REVEAL, "mt-4", "max-w-2xl")} data-reveal="">
                    {"We design, build and fit interiors in our own workshop, so one team owns your project from the first sketch to the last hinge."}
                </p>
                <div class={styles::SECTION_GRID}>
                    { for content.stats.iter().map(|stat| html! { <StatCounter stat={stat.clone()} /> }) }
                </div>
            </Section>

            <Section id="services" title="Services">
                <ServiceGallery services={content.services.clone()} />
                <div class={classes!(styles::CARD, "mt-8", "max-w-xl")}>
                    <h3 class={styles::TEXT_H3}>{"Get a quote"}</h3>
                    <ServiceEnquiryForm services={content.services.clone()} />
                </div>
            </Section>

            <Section id="portfolio" title="Portfolio" alt=true>
                <Projects projects={content.projects.clone()} categories={content.project_categories()} />
            </Section>

            <Section id="testimonials" title="What clients say">
                <Carousel slides={content.testimonials.clone()} config={content.carousel.clone()} />
            </Section>

            <Section id="contact" title="Contact" alt=true>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mt-4">
                    <div class={styles::CARD}>
                        <ContactFormView />
                    </div>
                    <div class={styles::CARD}>
                        <h3 class={styles::TEXT_H3}>{"Stay in touch"}</h3>
                        <p class={styles::TEXT_SMALL}>{"Occasional project stories and offers. No spam."}</p>
                        <NewsletterForm />
                    </div>
                </div>
            </Section>

            <CallbackModal />
        </Base>
    }
}
