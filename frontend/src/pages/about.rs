use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::scroll_to_top;
use crate::components::impact_section::ImpactGrid;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub name: AttrValue,
    pub role: AttrValue,
    pub bio: AttrValue,
    pub avatar: AttrValue,
    pub skills: Vec<AttrValue>,
}

#[function_component]
pub fn Profile(props: &ProfileProps) -> Html {
    html! {
        <div class="profile-card">
            <div class="profile-avatar">{props.avatar.clone()}</div>
            <h3>{props.name.clone()}</h3>
            <p class="profile-role">{props.role.clone()}</p>
            <p class="profile-bio">{props.bio.clone()}</p>
            <div class="profile-skills">
                { for props.skills.iter().map(|s| html! { <span class="skill">{s.clone()}</span> }) }
            </div>
        </div>
    }
}

#[function_component]
pub fn About() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="page about-page">
            <div class="page-header dark">
                <h1>{"About Moby Labs"}</h1>
                <p>{"Pioneering marine conservation technology to protect endangered whales"}</p>
            </div>

            <section class="team-section">
                <h2>{"Meet Our Team"}</h2>
                <div class="team-grid">
                    <Profile
                        name="Matthew Li"
                        role="Co-Founder & CEO"
                        bio="Passionate about leveraging AI and machine learning to solve critical environmental challenges. Specializes in computer vision and marine conservation technology."
                        avatar="👨‍💻"
                        skills={vec![AttrValue::from("AI/ML"), AttrValue::from("Computer Vision")]}
                    />
                    <Profile
                        name="Taha Rawjani"
                        role="Co-Founder & CTO"
                        bio="Dedicated to marine biology research and conservation strategy. Bridges the gap between cutting-edge technology and real-world marine conservation efforts."
                        avatar="👨‍🔬"
                        skills={vec![AttrValue::from("Research"), AttrValue::from("Embedded Systems")]}
                    />
                </div>
            </section>

            <ImpactGrid />

            <section class="cta">
                <h3>{"Join Us in Our Mission"}</h3>
                <p>{"Whether you're a shipping company, researcher, or conservation organization, let's work together to protect our oceans."}</p>
                <div class="cta-buttons">
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Get in Touch"}</Link<Route>>
                    <Link<Route> to={Route::LiveMap} classes="btn btn-outline">{"View Live Map"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
