use crate::models::{clean_text, JobRecord};
use crate::scrapers::traits::ListingMarkup;
use anyhow::{anyhow, Context, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Indeed search results markup
pub struct IndeedMarkup {
    count_selector: Selector,
    card_selector: Selector,
    title_selector: Selector,
    company_selector: Selector,
    location_selector: Selector,
    summary_selector: Selector,
    salary_selector: Selector,
    number_pattern: Regex,
}

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector {}: {:?}", css, e))
}

impl IndeedMarkup {
    pub fn new() -> Result<Self> {
        Ok(Self {
            count_selector: selector("#searchCountPages")?,
            card_selector: selector(".jobsearch-SerpJobCard")?,
            title_selector: selector(".title>a")?,
            company_selector: selector(".sjcl .company")?,
            location_selector: selector(".sjcl .location")?,
            summary_selector: selector(".summary")?,
            salary_selector: selector(".salary .salaryText")?,
            number_pattern: Regex::new(r"[0-9,]+").context("Invalid count pattern")?,
        })
    }

    /// Reads the total out of indicator text such as "1페이지 결과 2,195건".
    /// The first number is the current page, the second the total.
    pub fn parse_count(&self, text: &str) -> usize {
        self.number_pattern
            .find_iter(text)
            .nth(1)
            .map(|m| m.as_str().replace(',', ""))
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(0)
    }

    /// Text of every element under `card` matching `selector`, joined then cleaned
    fn field(card: &ElementRef<'_>, selector: &Selector) -> String {
        let raw: String = card.select(selector).flat_map(|el| el.text()).collect();
        clean_text(&raw)
    }

    fn parse_card(&self, card: ElementRef<'_>) -> JobRecord {
        JobRecord {
            id: card.value().attr("data-jk").unwrap_or_default().to_string(),
            title: Self::field(&card, &self.title_selector),
            company: Self::field(&card, &self.company_selector),
            location: Self::field(&card, &self.location_selector),
            summary: Self::field(&card, &self.summary_selector),
            salary: Self::field(&card, &self.salary_selector),
        }
    }
}

impl ListingMarkup for IndeedMarkup {
    fn result_count(&self, document: &Html) -> usize {
        document
            .select(&self.count_selector)
            .next()
            .map(|el| self.parse_count(&clean_text(&el.text().collect::<String>())))
            .unwrap_or(0)
    }

    fn listings(&self, document: &Html) -> Vec<JobRecord> {
        document
            .select(&self.card_selector)
            .map(|card| self.parse_card(card))
            .collect()
    }

    fn source_name(&self) -> &'static str {
        "Indeed"
    }
}
