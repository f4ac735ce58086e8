//! Page and collection builders.
//!
//! File and folder paths are plain string concatenation; nothing here looks
//! at the filesystem.

use crate::args::{PageArgs, PostTypeArgs};
use crate::builder::Builder;
use crate::merge::without_reserved;
use crate::text::{singularize, titleize};
use crate::types::{Editor, Field, Page, PostType};

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Builder {
    /// Builds a singleton page stored at
    /// `{path}{folder}/{filename or name}.{extension}`.
    ///
    /// A disabled i18n setting is written under `_i18n` so the CMS ignores
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cms_fields_core::{Builder, PageArgs};
    ///
    /// let b = Builder::default();
    /// let home = b.page("home", Vec::new(), PageArgs::new());
    /// assert_eq!(home.file, "src/content/pages/home.yml");
    /// assert_eq!(home.label, "Home");
    ///
    /// let plain = b.page("legal", Vec::new(), PageArgs::new().i18n(false));
    /// assert!(plain.i18n.is_none());
    /// assert!(plain.disabled_i18n.is_some());
    /// ```
    pub fn page(&self, name: &str, fields: Vec<Field>, args: PageArgs) -> Page {
        let defaults = self.defaults();
        let path = args.path.unwrap_or_else(|| defaults.page_path.clone());
        let folder = args.folder.unwrap_or_else(|| defaults.pages_folder.clone());
        let stem = non_empty(args.filename).unwrap_or_else(|| name.to_string());
        let extension = args.extension.unwrap_or(defaults.page_extension);

        let (i18n, disabled_i18n) = match args.i18n.or_else(|| defaults.i18n.clone()) {
            Some(setting) if !setting.is_enabled() => (None, Some(setting)),
            setting => (setting, None),
        };

        Page {
            name: name.to_string(),
            file: format!("{path}{folder}/{stem}.{}", extension.as_str()),
            label: non_empty(args.label).unwrap_or_else(|| titleize(name)),
            fields,
            i18n,
            disabled_i18n,
            extra: without_reserved(args.extra, &Page::RESERVED_KEYS),
        }
    }

    /// A page stored in the data folder rather than the pages folder.
    pub fn settings_page(&self, name: &str, fields: Vec<Field>, mut args: PageArgs) -> Page {
        if args.folder.is_none() {
            args.folder = Some(self.defaults().data_folder.clone());
        }
        self.page(name, fields, args)
    }

    /// Builds a folder collection stored at `{path}{subfolder}/{name}`.
    ///
    /// Entries can be created from the editor, the preview pane is off, and
    /// the singular label falls back to the name minus its last character.
    ///
    /// # Examples
    ///
    /// ```
    /// use cms_fields_core::{Builder, PostTypeArgs};
    ///
    /// let articles = Builder::default().post_type("articles", Vec::new(), PostTypeArgs::new());
    /// assert_eq!(articles.folder, "src/content/articles");
    /// assert_eq!(articles.label_singular, "article");
    /// assert!(articles.create);
    /// assert_eq!(articles.slug, "{{slug}}");
    /// ```
    pub fn post_type(&self, name: &str, fields: Vec<Field>, args: PostTypeArgs) -> PostType {
        let defaults = self.defaults();
        let path = args.path.unwrap_or_else(|| defaults.collection_path.clone());
        let subfolder = args.subfolder.unwrap_or_default();

        PostType {
            name: name.to_string(),
            folder: format!("{path}{subfolder}/{name}"),
            label: non_empty(args.label).unwrap_or_else(|| titleize(name)),
            format: args.format.or(defaults.post_format),
            fields,
            editor: Editor { preview: false },
            label_singular: non_empty(args.label_singular).unwrap_or_else(|| singularize(name)),
            create: true,
            slug: args.slug.unwrap_or_else(|| defaults.slug.clone()),
            i18n: args.i18n.or_else(|| defaults.i18n.clone()),
            extra: without_reserved(args.extra, &PostType::RESERVED_KEYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::args::FieldArgs;
    use crate::types::{I18n, PageExtension, PostFormat};

    #[test]
    fn test_page_path_parts() {
        let page = Builder::default().page(
            "about",
            Vec::new(),
            PageArgs::new()
                .path("site/")
                .folder("static")
                .filename("about-us")
                .extension(PageExtension::Md),
        );
        assert_eq!(page.file, "site/static/about-us.md");
        assert_eq!(page.label, "About");
    }

    #[test]
    fn test_page_keeps_field_order() {
        let b = Builder::default();
        let fields = vec![
            b.title(None, FieldArgs::new()),
            b.body(FieldArgs::new()),
        ];
        let page = b.page("home", fields, PageArgs::new().label("Homepage"));
        assert_eq!(page.label, "Homepage");
        let names: Vec<&str> = page.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["title", "body"]);
        assert!(page.find_field("body").is_some());
    }

    #[test]
    fn test_page_i18n_defaults() {
        let page = Builder::default().page("home", Vec::new(), PageArgs::new());
        assert_eq!(page.i18n, Some(I18n::Flag(true)));
        assert!(page.disabled_i18n.is_none());

        let legacy = Builder::legacy().page("home", Vec::new(), PageArgs::new());
        assert!(legacy.i18n.is_none() && legacy.disabled_i18n.is_none());
    }

    #[test]
    fn test_settings_page_uses_data_folder() {
        let b = Builder::default();
        let site = b.settings_page("site", Vec::new(), PageArgs::new());
        assert_eq!(site.file, "src/content/_data/site.yml");
        let moved = b.settings_page("site", Vec::new(), PageArgs::new().folder("config"));
        assert_eq!(moved.file, "src/content/config/site.yml");
    }

    #[test]
    fn test_page_extra_passthrough() {
        let page = Builder::default().page(
            "home",
            Vec::new(),
            PageArgs::new().set("preview_path", "/").set("file", "ignored"),
        );
        assert_eq!(page.extra.get("preview_path"), Some(&json!("/")));
        assert_eq!(page.file, "src/content/pages/home.yml");
        assert!(page.extra.get("file").is_none());
    }

    #[test]
    fn test_post_type_overrides() {
        let post = Builder::default().post_type(
            "news",
            Vec::new(),
            PostTypeArgs::new()
                .label("Latest news")
                .label_singular("News item")
                .subfolder("/blog")
                .slug("{{year}}-{{slug}}")
                .format(PostFormat::YamlFrontmatter)
                .set("sortable_fields", json!(["date"])),
        );
        assert_eq!(post.folder, "src/content/blog/news");
        assert_eq!(post.label, "Latest news");
        assert_eq!(post.label_singular, "News item");
        assert_eq!(post.slug, "{{year}}-{{slug}}");
        assert_eq!(post.format, Some(PostFormat::YamlFrontmatter));
        assert_eq!(post.extra.get("sortable_fields"), Some(&json!(["date"])));
        assert!(!post.editor.preview);
    }

    #[test]
    fn test_post_type_empty_label_singular_falls_back() {
        let post = Builder::default().post_type(
            "events",
            Vec::new(),
            PostTypeArgs::new().label_singular(""),
        );
        assert_eq!(post.label_singular, "event");
    }

    #[test]
    fn test_post_type_legacy_omits_format_and_i18n() {
        let post = Builder::legacy().post_type("articles", Vec::new(), PostTypeArgs::new());
        assert!(post.format.is_none());
        assert!(post.i18n.is_none());
    }
}
