use leptos::prelude::*;

use crate::contact::owner_mailto;
use crate::profile::OWNER_NAME;

#[component]
fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section id=id class="py-24 scroll-mt-28">
            <h2 class="text-3xl font-bold mb-4">{ title }</h2>
            { children() }
        </section>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto px-6 pt-32">
            <Section id="author" title="Who am I ?">
                <p class="text-lg">{ format!("Hi, I'm {OWNER_NAME}. I build things for the web.") }</p>
            </Section>

            <Section id="techStacks" title="Tech Stacks">
                <ul class="flex flex-wrap gap-3">
                    <li class="px-3 py-1 rounded-full border">"Rust"</li>
                    <li class="px-3 py-1 rounded-full border">"Leptos"</li>
                    <li class="px-3 py-1 rounded-full border">"actix-web"</li>
                    <li class="px-3 py-1 rounded-full border">"Tailwind"</li>
                </ul>
            </Section>

            <Section id="freelance" title="Freelance">
                <p>"Open to freelance work, get in touch through the contact menu."</p>
            </Section>

            <Section id="socialMedia" title="Social Media">
                <a href=owner_mailto() class="underline hover:text-sky-500">"Email me"</a>
            </Section>
        </div>
    }
}
