// ABOUTME: Thread-safe in-memory catalog of articles, categories, tools, and resources.
// ABOUTME: Stands in for the persistence collaborator; view counts use atomic increments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ContentError;
use crate::models::{Article, Category, Resource, Tool};
use crate::slug::slugify;

/// An article together with its current view count.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub article: Article,
    pub views: u64,
}

struct ArticleRecord {
    article: Article,
    views: AtomicU64,
}

/// In-memory content catalog.
///
/// All queries return clones; no lock is held across calls. View-count
/// increments take only the shared read lock and use an atomic add, so
/// concurrent increments never lose updates.
#[derive(Default)]
pub struct Catalog {
    articles: RwLock<HashMap<String, ArticleRecord>>,
    categories: RwLock<HashMap<String, Category>>,
    tools: RwLock<HashMap<String, Tool>>,
    resources: RwLock<HashMap<String, Resource>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an article, deriving a slug from the title when none is set.
    /// Returns the slug the article was stored under.
    pub fn add_article(&self, mut article: Article) -> Result<String, ContentError> {
        if article.slug.is_empty() {
            article.slug = slugify(&article.title);
        }
        let slug = article.slug.clone();
        let mut articles = write(&self.articles);
        if articles.contains_key(&slug) {
            return Err(ContentError::conflict(slug));
        }
        articles.insert(
            slug.clone(),
            ArticleRecord {
                article,
                views: AtomicU64::new(0),
            },
        );
        Ok(slug)
    }

    pub fn add_category(&self, mut category: Category) -> Result<String, ContentError> {
        if category.slug.is_empty() {
            category.slug = slugify(&category.name);
        }
        let slug = category.slug.clone();
        let mut categories = write(&self.categories);
        if categories.contains_key(&slug) {
            return Err(ContentError::conflict(slug));
        }
        categories.insert(slug.clone(), category);
        Ok(slug)
    }

    pub fn add_tool(&self, mut tool: Tool) -> Result<String, ContentError> {
        if tool.slug.is_empty() {
            tool.slug = slugify(&tool.name);
        }
        let slug = tool.slug.clone();
        let mut tools = write(&self.tools);
        if tools.contains_key(&slug) {
            return Err(ContentError::conflict(slug));
        }
        tools.insert(slug.clone(), tool);
        Ok(slug)
    }

    pub fn add_resource(&self, mut resource: Resource) -> Result<String, ContentError> {
        if resource.slug.is_empty() {
            resource.slug = slugify(&resource.name);
        }
        let slug = resource.slug.clone();
        let mut resources = write(&self.resources);
        if resources.contains_key(&slug) {
            return Err(ContentError::conflict(slug));
        }
        resources.insert(slug.clone(), resource);
        Ok(slug)
    }

    /// Looks up one article with its current view count.
    pub fn article(&self, slug: &str) -> Result<ArticleView, ContentError> {
        let articles = read(&self.articles);
        let record = articles
            .get(slug)
            .ok_or_else(|| ContentError::unknown(slug))?;
        Ok(ArticleView {
            article: record.article.clone(),
            views: record.views.load(Ordering::Relaxed),
        })
    }

    /// Increments an article's view count and returns the new value.
    pub fn record_view(&self, slug: &str) -> Result<u64, ContentError> {
        let articles = read(&self.articles);
        let record = articles
            .get(slug)
            .ok_or_else(|| ContentError::unknown(slug))?;
        Ok(record.views.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Tutorial articles, newest first.
    pub fn tutorials(&self) -> Vec<Article> {
        self.articles_sorted(|a| a.is_tutorial)
    }

    /// Non-tutorial articles, newest first.
    pub fn posts(&self) -> Vec<Article> {
        self.articles_sorted(|a| !a.is_tutorial)
    }

    /// The first article flagged for the homepage, preferring the newest.
    pub fn featured(&self) -> Option<Article> {
        self.articles_sorted(|a| a.is_featured).into_iter().next()
    }

    /// The most viewed articles, capped at `limit`.
    pub fn popular(&self, limit: usize) -> Vec<ArticleView> {
        let articles = read(&self.articles);
        let mut views: Vec<ArticleView> = articles
            .values()
            .map(|record| ArticleView {
                article: record.article.clone(),
                views: record.views.load(Ordering::Relaxed),
            })
            .collect();
        views.sort_by(|a, b| {
            b.views
                .cmp(&a.views)
                .then_with(|| b.article.published_ms.cmp(&a.article.published_ms))
        });
        views.truncate(limit);
        views
    }

    /// Articles in a category, newest first.
    pub fn articles_in_category(&self, category_slug: &str) -> Vec<Article> {
        self.articles_sorted(|a| a.category_slug.as_deref() == Some(category_slug))
    }

    /// Articles carrying a tag, matched by slugified form, newest first.
    pub fn articles_with_tag(&self, tag: &str) -> Vec<Article> {
        let wanted = slugify(tag);
        self.articles_sorted(|a| a.tags.iter().any(|t| slugify(t) == wanted))
    }

    /// Case-insensitive substring search over title and content.
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Article> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.articles_sorted(|a| {
            a.title.to_lowercase().contains(&query) || a.content.to_lowercase().contains(&query)
        })
    }

    /// Articles sharing a category with the given one, excluding it, newest first.
    pub fn related_articles(&self, slug: &str, limit: usize) -> Vec<Article> {
        let Ok(view) = self.article(slug) else {
            return Vec::new();
        };
        let Some(category) = view.article.category_slug else {
            return Vec::new();
        };
        let mut related = self
            .articles_sorted(|a| a.slug != slug && a.category_slug.as_deref() == Some(category.as_str()));
        related.truncate(limit);
        related
    }

    /// All categories, by name.
    pub fn categories(&self) -> Vec<Category> {
        let mut all: Vec<Category> = read(&self.categories).values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// All tools, by name.
    pub fn tools(&self) -> Vec<Tool> {
        let mut all: Vec<Tool> = read(&self.tools).values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// All resources, by name.
    pub fn resources(&self) -> Vec<Resource> {
        let mut all: Vec<Resource> = read(&self.resources).values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Tools sharing a category with the given one, excluding it, by name.
    pub fn related_tools(&self, slug: &str, limit: usize) -> Vec<Tool> {
        let tools = read(&self.tools);
        let Some(category) = tools.get(slug).and_then(|t| t.category_slug.clone()) else {
            return Vec::new();
        };
        let mut related: Vec<Tool> = tools
            .values()
            .filter(|t| t.slug != slug && t.category_slug.as_deref() == Some(category.as_str()))
            .cloned()
            .collect();
        related.sort_by(|a, b| a.name.cmp(&b.name));
        related.truncate(limit);
        related
    }

    /// Resources sharing a category with the given one, excluding it, by name.
    pub fn related_resources(&self, slug: &str, limit: usize) -> Vec<Resource> {
        let resources = read(&self.resources);
        let Some(category) = resources.get(slug).and_then(|r| r.category_slug.clone()) else {
            return Vec::new();
        };
        let mut related: Vec<Resource> = resources
            .values()
            .filter(|r| r.slug != slug && r.category_slug.as_deref() == Some(category.as_str()))
            .cloned()
            .collect();
        related.sort_by(|a, b| a.name.cmp(&b.name));
        related.truncate(limit);
        related
    }

    /// All articles as views, for maintenance tooling.
    pub fn all_articles(&self) -> Vec<ArticleView> {
        let articles = read(&self.articles);
        let mut all: Vec<ArticleView> = articles
            .values()
            .map(|record| ArticleView {
                article: record.article.clone(),
                views: record.views.load(Ordering::Relaxed),
            })
            .collect();
        all.sort_by(|a, b| {
            b.article
                .published_ms
                .cmp(&a.article.published_ms)
                .then_with(|| a.article.slug.cmp(&b.article.slug))
        });
        all
    }

    fn articles_sorted<F>(&self, keep: F) -> Vec<Article>
    where
        F: Fn(&Article) -> bool,
    {
        let articles = read(&self.articles);
        let mut matched: Vec<Article> = articles
            .values()
            .filter(|record| keep(&record.article))
            .map(|record| record.article.clone())
            .collect();
        matched.sort_by(|a, b| {
            b.published_ms
                .cmp(&a.published_ms)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        matched
    }
}
