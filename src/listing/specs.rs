use crate::catalog::Category;

use super::types::{ListingSpec, TypeOption};

const fn option(value: &'static str, label: &'static str) -> TypeOption {
    TypeOption { value, label }
}

pub fn listing_spec(category: Category) -> ListingSpec {
    match category {
        Category::Achievement => ListingSpec {
            category,
            heading: "Achievements & Awards",
            intro: "Awards, competitions and research grants received over the years",
            noun: "prestasi",
            empty_message: "Tidak ada prestasi yang ditemukan",
            type_options: vec![
                option("achievement", "Prestasi & Penghargaan"),
                option("award", "Awards"),
                option("competition", "Kompetisi"),
                option("grant", "Hibah Penelitian"),
            ],
        },
        Category::Publication => ListingSpec {
            category,
            heading: "Publications",
            intro: "Research papers, conference proceedings, journal articles and book chapters",
            noun: "publikasi",
            empty_message: "Tidak ada publikasi yang ditemukan",
            type_options: vec![
                option("research", "Research Papers"),
                option("conference", "Conference Papers"),
                option("journal", "Journal Articles"),
                option("book", "Book Chapters"),
            ],
        },
        Category::Project => ListingSpec {
            category,
            heading: "Projects",
            intro: "Medical technology, security tooling and applications built from idea to release",
            noun: "proyek",
            empty_message: "Tidak ada proyek yang ditemukan",
            type_options: vec![
                option("med-tech", "Medical Technology"),
                option("security", "Cybersecurity"),
                option("research", "Research Tools"),
                option("web-app", "Web Applications"),
                option("mobile-app", "Mobile Applications"),
            ],
        },
        Category::Service => ListingSpec {
            category,
            heading: "Service & Community",
            intro: "Volunteer work, community service, education and social impact",
            noun: "kegiatan",
            empty_message: "Tidak ada kegiatan yang ditemukan",
            type_options: vec![
                option("volunteer", "Volunteer Work"),
                option("community", "Community Service"),
                option("education", "Education & Training"),
                option("social", "Social Impact"),
            ],
        },
        Category::Media => ListingSpec {
            category,
            heading: "Media & Talks",
            intro: "Presentations, interviews, media coverage and workshops",
            noun: "liputan",
            empty_message: "Tidak ada liputan media yang ditemukan",
            type_options: vec![
                option("presentation", "Presentasi"),
                option("interview", "Interview"),
                option("media-coverage", "Media Coverage"),
                option("workshop", "Workshop"),
            ],
        },
        Category::Certificate => ListingSpec {
            category,
            heading: "Certificates & Training",
            intro: "Professional certifications, training completions, and skill development achievements",
            noun: "sertifikat",
            empty_message: "Tidak ada sertifikat yang ditemukan",
            type_options: vec![
                option("certification", "Professional Certification"),
                option("training", "Training Completion"),
                option("course", "Online Course"),
                option("workshop", "Workshop Certificate"),
            ],
        },
    }
}

pub fn all_listing_specs() -> Vec<ListingSpec> {
    Category::ALL.into_iter().map(listing_spec).collect()
}
