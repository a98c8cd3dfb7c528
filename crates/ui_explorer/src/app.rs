use atomize_ui::prelude::*;
use leptos::*;

use crate::stories::{all_docs, all_stories, docs_for};
use crate::story::{ComponentDocs, Story};

#[component]
/// Explorer shell: story sidebar, live canvas, and documentation panel.
pub fn ExplorerApp(
    /// Story selected on first render. Falls back to the first story.
    #[prop(optional, into)]
    initial_story: Option<String>,
) -> impl IntoView {
    let stories = store_value(all_stories());
    let first_id = stories.with_value(|stories| {
        stories
            .first()
            .map(|story| story.id.clone())
            .unwrap_or_default()
    });
    let initial = initial_story
        .filter(|id| stories.with_value(|stories| stories.iter().any(|story| &story.id == id)))
        .unwrap_or(first_id);
    let selected = create_rw_signal(initial);

    let current = Signal::derive(move || {
        let id = selected.get();
        stories.with_value(|stories| stories.iter().find(|story| story.id == id).cloned())
    });

    view! {
        <div class="grid min-h-screen grid-cols-[16rem_1fr_22rem] bg-background text-foreground">
            <nav class="border-r p-4" aria-label="Stories">
                {all_docs()
                    .into_iter()
                    .map(|docs| {
                        view! { <StoryGroup docs=docs stories=stories selected=selected /> }
                    })
                    .collect_view()}
            </nav>
            <main class="flex items-center justify-center p-10" data-explorer="canvas">
                {move || current.get().map(|story| story.view())}
            </main>
            <aside class="border-l p-4" data-explorer="docs">
                {move || current.get().map(|story| view! { <StoryDocs story=story /> })}
            </aside>
        </div>
    }
}

#[component]
fn StoryGroup(
    docs: ComponentDocs,
    stories: StoredValue<Vec<Story>>,
    selected: RwSignal<String>,
) -> impl IntoView {
    let entries = stories.with_value(|stories| {
        stories
            .iter()
            .filter(|story| story.component == docs.title)
            .map(|story| (story.id.clone(), story.title))
            .collect::<Vec<_>>()
    });

    view! {
        <section class="mb-6">
            <h2 class="mb-2 text-xs font-semibold uppercase tracking-wide text-muted-foreground">
                {docs.title}
            </h2>
            <ul class="grid gap-1">
                {entries
                    .into_iter()
                    .map(|(id, title)| {
                        let is_current = {
                            let id = id.clone();
                            move || selected.get() == id
                        };
                        let select = Callback::new(move |_| selected.set(id.clone()));
                        view! {
                            <li>
                                <Button
                                    variant=ButtonVariant::Ghost
                                    size=ButtonSize::Sm
                                    class="w-full justify-start"
                                    on_click=select
                                    attr:aria-current=move || is_current().then_some("page")
                                >
                                    {title}
                                </Button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn StoryDocs(story: Story) -> impl IntoView {
    let docs = docs_for(story.component);

    view! {
        <article class="grid gap-4 text-sm" data-story=story.id.clone()>
            <header>
                <p class="text-xs text-muted-foreground">{story.component}</p>
                <h1 class="text-lg font-semibold">{story.title}</h1>
                <p class="text-muted-foreground">{story.summary}</p>
            </header>
            {docs.map(|docs| view! { <ArgTable docs=docs /> })}
            <section>
                <h2 class="mb-1 font-medium">"Args"</h2>
                <pre class="overflow-auto rounded-md bg-muted p-3 text-xs">
                    {story.args.to_pretty_json()}
                </pre>
            </section>
        </article>
    }
}

#[component]
fn ArgTable(docs: ComponentDocs) -> impl IntoView {
    view! {
        <section>
            <p class="mb-2 text-muted-foreground">{docs.summary}</p>
            <table class="w-full text-left text-xs">
                <thead>
                    <tr>
                        <th scope="col">"Name"</th>
                        <th scope="col">"Type"</th>
                        <th scope="col">"Default"</th>
                        <th scope="col">"Description"</th>
                    </tr>
                </thead>
                <tbody>
                    {docs
                        .args
                        .iter()
                        .map(|arg| {
                            view! {
                                <tr>
                                    <td><code>{arg.name}</code></td>
                                    <td><code>{arg.type_summary}</code></td>
                                    <td>{arg.default.unwrap_or("-")}</td>
                                    <td>{arg.description}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_app(initial: Option<&str>) -> String {
        let runtime = create_runtime();
        let initial = initial.map(str::to_string);
        let html = match initial {
            Some(id) => view! { <ExplorerApp initial_story=id /> }.into_view(),
            None => view! { <ExplorerApp /> }.into_view(),
        }
        .render_to_string()
        .to_string();
        runtime.dispose();
        html
    }

    #[test]
    fn lists_every_component_and_story() {
        let html = render_app(None);
        for component in ["Button", "Input", "Label"] {
            assert!(html.contains(component), "missing {component}");
        }
        for story in all_stories() {
            assert!(html.contains(story.title), "missing {}", story.id);
        }
        assert!(html.contains("aria-current=\"page\""), "{html}");
    }

    #[test]
    fn renders_the_requested_story_with_its_docs() {
        let html = render_app(Some("input--telephone"));
        assert!(html.contains("data-story=\"input--telephone\""), "{html}");
        assert!(html.contains(">Telephone</h1>"), "{html}");
        assert!(html.contains("pattern=\"+?[0-9 -]+\""), "{html}");
        // Text nodes are escaped in string rendering.
        assert!(html.contains("&quot;type&quot;: &quot;tel&quot;"), "{html}");
        assert!(html.contains("autocomplete"), "{html}");
    }

    #[test]
    fn unknown_initial_story_falls_back_to_the_first() {
        let html = render_app(Some("button--nope"));
        assert!(html.contains("data-story=\"button--default\""), "{html}");
        assert!(html.contains(">Default</h1>"), "{html}");
    }
}
