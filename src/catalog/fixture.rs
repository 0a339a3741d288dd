use super::{Record, RecordKind, Vocabulary};

pub(super) fn records() -> Vec<Record> {
    vec![
        Record::new("1", "سورة البقرة", "المصحف المرتل", RecordKind::Surah).with_description(
            "أطول سورة في القرآن الكريم، وتتناول موضوعات متعددة تتعلق بالإيمان والعبادات والمعاملات.",
        ),
        Record::new("2", "سورة الفاتحة", "المصحف المرتل", RecordKind::Surah).with_description(
            "أم الكتاب وأم القرآن والسبع المثاني، وهي أول سورة في المصحف الشريف.",
        ),
        Record::new("3", "مشاري العفاسي", "قارئ من الكويت", RecordKind::Reader).with_description(
            "من أشهر قراء القرآن الكريم في العصر الحديث، يمتاز بصوت شجي وأداء متقن.",
        ),
        Record::new("4", "سورة البقرة - مرتل", "مشاري العفاسي", RecordKind::Recitation),
        Record::new(
            "5",
            "سورة البقرة - مجود",
            "عبد الباسط عبد الصمد",
            RecordKind::Recitation,
        ),
    ]
}

pub(super) fn suggestions() -> Vec<String> {
    owned(&[
        "سورة البقرة",
        "سورة آل عمران",
        "سورة النساء",
        "سورة المائدة",
        "سورة الأنعام",
        "مشاري العفاسي",
        "عبد الباسط عبد الصمد",
        "محمود خليل الحصري",
        "محمد صديق المنشاوي",
        "تلاوة مرتلة",
        "تلاوة مجودة",
    ])
}

pub(super) fn vocabulary() -> Vocabulary {
    Vocabulary {
        reader: owned(&[
            "عبد الباسط عبد الصمد",
            "محمود خليل الحصري",
            "مشاري العفاسي",
            "محمد صديق المنشاوي",
        ]),
        surah: owned(&["الفاتحة", "البقرة", "آل عمران", "النساء", "المائدة"]),
        recitation_type: owned(&["مرتل", "مجود", "حدر"]),
    }
}

pub(super) fn ai_prompts() -> Vec<String> {
    owned(&[
        "ابحث عن الآيات التي تحتوي على أسماء الله الحسنى",
        "آيات عن الصبر والشكر",
        "سور تبدأ بالحروف المقطعة",
        "آيات تتحدث عن الجنة",
        "ابحث عن أطول آية في القرآن",
    ])
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
