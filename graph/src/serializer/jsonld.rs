//! JSON-LD 1.1 serializer.
//!
//! Produces a single flattened JSON-LD document: a `@context` of the
//! well-known prefixes and a `@graph` array with one node object per subject.

use serde_json::{json, Map, Value};

use crate::model::{iris, Graph, Term};

/// Serializes `graph` to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(graph: &Graph) -> Value {
    let mut ctx = Map::new();
    for (prefix, ns) in iris::WELL_KNOWN_PREFIXES {
        ctx.insert((*prefix).to_owned(), json!(ns));
    }

    let mut nodes: Vec<Value> = Vec::new();
    let mut node: Option<(&Term, Map<String, Value>)> = None;

    for t in graph {
        let same_subject = node.as_ref().map_or(false, |(s, _)| *s == &t.subject);
        if !same_subject {
            if let Some((_, done)) = node.take() {
                nodes.push(Value::Object(done));
            }
            let mut fresh = Map::new();
            fresh.insert("@id".to_owned(), json!(node_id(&t.subject)));
            node = Some((&t.subject, fresh));
        }
        let Some((_, obj)) = node.as_mut() else {
            continue;
        };

        let (key, value) = if t.predicate.as_str() == iris::RDF_TYPE {
            match &t.object {
                Term::Iri(iri) => ("@type".to_owned(), json!(iri.as_str())),
                other => (t.predicate.to_string(), object_value(other)),
            }
        } else {
            (t.predicate.to_string(), object_value(&t.object))
        };
        push_value(obj, key, value);
    }
    if let Some((_, done)) = node {
        nodes.push(Value::Object(done));
    }

    json!({
        "@context": Value::Object(ctx),
        "@graph": nodes
    })
}

fn node_id(term: &Term) -> String {
    match term {
        Term::Iri(iri) => iri.to_string(),
        Term::BlankNode(label) => format!("_:{}", label),
        Term::Literal(lit) => lit.lexical.clone(),
    }
}

fn object_value(term: &Term) -> Value {
    match term {
        Term::Iri(_) | Term::BlankNode(_) => json!({ "@id": node_id(term) }),
        Term::Literal(lit) => {
            let mut v = Map::new();
            v.insert("@value".to_owned(), json!(lit.lexical));
            if let Some(lang) = &lit.language {
                v.insert("@language".to_owned(), json!(lang));
            } else if let Some(dt) = &lit.datatype {
                v.insert("@type".to_owned(), json!(dt.as_str()));
            }
            Value::Object(v)
        }
    }
}

/// Sets `key` to `value`, turning the entry into an array on repeats.
fn push_value(obj: &mut Map<String, Value>, key: String, value: Value) {
    match obj.get_mut(&key) {
        None => {
            obj.insert(key, value);
        }
        Some(Value::Array(values)) => values.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}
