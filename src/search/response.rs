//! Serde models for the search API response and text flattening

use serde::Deserialize;

use crate::constants::MAX_SEARCH_RESULTS;

/// Top-level search API response. Only the fields this crate consumes are
/// modeled; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
    #[serde(default)]
    pub answer_box: Option<AnswerBox>,
    #[serde(default)]
    pub knowledge_graph: Option<KnowledgeGraph>,
}

/// A single organic search hit.
#[derive(Debug, Deserialize)]
pub struct OrganicResult {
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Direct-answer box, present for some queries.
#[derive(Debug, Deserialize)]
pub struct AnswerBox {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Knowledge-graph panel, present for entity queries.
#[derive(Debug, Deserialize)]
pub struct KnowledgeGraph {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SearchResponse {
    /// Flattens the response into readable text, one result per block.
    /// Answer box and knowledge graph come first when present, followed by
    /// up to `MAX_SEARCH_RESULTS` organic hits.
    pub fn to_text(&self) -> String {
        let mut sections = Vec::new();

        if let Some(answer_box) = &self.answer_box {
            let answer = answer_box
                .answer
                .as_deref()
                .or(answer_box.snippet.as_deref());
            if let Some(answer) = answer {
                match &answer_box.title {
                    Some(title) => sections.push(format!("{title}: {answer}")),
                    None => sections.push(answer.to_string()),
                }
            }
        }

        if let Some(graph) = &self.knowledge_graph
            && let (Some(title), Some(description)) = (&graph.title, &graph.description)
        {
            sections.push(format!("{title} - {description}"));
        }

        for result in self.organic.iter().take(MAX_SEARCH_RESULTS) {
            let mut block = result.title.clone();
            if let Some(snippet) = &result.snippet {
                block.push('\n');
                block.push_str(snippet);
            }
            if let Some(link) = &result.link {
                block.push('\n');
                block.push_str(link);
            }
            sections.push(block);
        }

        if sections.is_empty() {
            "No search results found.".to_string()
        } else {
            sections.join("\n\n")
        }
    }
}
