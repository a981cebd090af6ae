use seqrecord::clean::Cleaner;
use seqrecord::document::Document;
use seqrecord::document::Node;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let document = sample();

    for result in document.records(Cleaner) {
        let record = result?;

        println!(
            "{} ({} letters)",
            record.primary_accession().unwrap_or("?"),
            record.letters().len()
        );

        for feature in record.features() {
            let frames = feature
                .resolve()?
                .iter()
                .map(|resolved| resolved.frame().to_string())
                .collect::<Vec<_>>()
                .join(", ");

            println!(
                "  {} frames=[{}] -> {}",
                feature.key().unwrap_or("?"),
                frames,
                feature.sequence(&record)?
            );
        }
    }

    Ok(())
}

fn sample() -> Document {
    Document::new(vec![Node::new("INSDSeq")
        .with_child(Node::new("INSDSeq_primary-accession").with_text("U00096"))
        .with_child(Node::new("INSDSeq_moltype").with_text("DNA"))
        .with_child(Node::new("INSDSeq_sequence").with_text("atgaaacgcattagcaccaccattaccacca"))
        .with_child(
            Node::new("INSDSeq_feature-table").with_child(
                Node::new("INSDFeature")
                    .with_child(Node::new("INSDFeature_key").with_text("CDS"))
                    .with_child(
                        Node::new("INSDFeature_intervals")
                            .with_child(
                                Node::new("INSDInterval")
                                    .with_child(Node::new("INSDInterval_from").with_text("1"))
                                    .with_child(Node::new("INSDInterval_to").with_text("10")),
                            )
                            .with_child(
                                Node::new("INSDInterval")
                                    .with_child(Node::new("INSDInterval_from").with_text("17"))
                                    .with_child(Node::new("INSDInterval_to").with_text("28"))
                                    .with_child(
                                        Node::new("INSDInterval_iscomp")
                                            .with_attribute("value", "true"),
                                    ),
                            ),
                    ),
            ),
        )])
}
