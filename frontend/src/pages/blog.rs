use yew::prelude::*;
use yew_router::prelude::*;

use crate::blog::content::{render_blocks, Block, BlogPost, BlogSource, StaticBlog};
use crate::browser::scroll_to_top;
use crate::pages::not_found::NotFound;
use crate::Route;

fn render_block(block: Block) -> Html {
    match block {
        Block::Heading(1, text) => html! { <h1>{text}</h1> },
        Block::Heading(2, text) => html! { <h2>{text}</h2> },
        Block::Heading(_, text) => html! { <h3>{text}</h3> },
        Block::Paragraph(text) => html! { <p>{text}</p> },
        Block::List(items) => html! {
            <ul>{ for items.into_iter().map(|item| html! { <li>{item}</li> }) }</ul>
        },
    }
}

fn preview(post: &BlogPost) -> Html {
    html! {
        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="blog-card">
            <div class="blog-meta">
                <span>{post.display_date()}</span>
                <span>{"•"}</span>
                <span>{post.reading_time_label()}</span>
            </div>
            <h2>{post.title}</h2>
            <p>{post.excerpt()}</p>
            <div class="blog-card-footer">
                <span>{format!("By {}", post.author)}</span>
                <span class="read-more">{"Read More →"}</span>
            </div>
        </Link<Route>>
    }
}

#[function_component]
pub fn BlogList() -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );
    let blog = StaticBlog::default();

    html! {
        <div class="page blog-list-page">
            <section class="page-header gradient">
                <h1>{"Whale Education Blog"}</h1>
                <p>{"Dive deep into the fascinating world of whales. Learn about their behavior, conservation, and the technology protecting them."}</p>
            </section>
            <section class="blog-list">
                if blog.posts().is_empty() {
                    <div class="empty-state">
                        <p>{"No blog posts yet. Check back soon!"}</p>
                    </div>
                } else {
                    <div class="blog-grid">
                        { for blog.posts().iter().map(preview) }
                    </div>
                }
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component]
pub fn BlogPostPage(props: &BlogPostPageProps) -> Html {
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        props.slug.clone(),
    );
    let blog = StaticBlog::default();

    let Some(post) = blog.get_by_slug(&props.slug) else {
        log::info!("Unknown blog slug {}", props.slug);
        return html! { <NotFound /> };
    };

    html! {
        <div class="page blog-post-page">
            <section class="page-header gradient">
                <Link<Route> to={Route::Blog} classes="back-link">{"← Back to Blog"}</Link<Route>>
                <h1>{post.title}</h1>
                <div class="blog-meta">
                    <span>{format!("By {}", post.author)}</span>
                    <span>{"•"}</span>
                    <span>{post.display_date()}</span>
                    <span>{"•"}</span>
                    <span>{post.reading_time_label()}</span>
                </div>
            </section>
            <article class="prose">
                { for render_blocks(post.content).into_iter().map(render_block) }
            </article>
            <section class="cta">
                <h2>{"Want to Learn More?"}</h2>
                <p>{"Explore more articles about whales and ocean conservation."}</p>
                <div class="cta-buttons">
                    <Link<Route> to={Route::Blog} classes="btn btn-primary">{"Read More Articles"}</Link<Route>>
                    <Link<Route> to={Route::LiveMap} classes="btn btn-outline">{"View Demo Map"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
