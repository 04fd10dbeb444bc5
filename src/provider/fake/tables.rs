//! Built-in catalogues for values the `fake` crate does not cover.

pub const EN_FEMALE_FIRST_NAMES: [&str; 20] = [
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Emily", "Olivia", "Emma", "Sophia", "Grace", "Chloe", "Hannah", "Amelia", "Lucy",
    "Alice",
];

pub const EN_MALE_FIRST_NAMES: [&str; 20] = [
    "James", "Robert", "John", "Michael", "David", "William", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Andrew", "Paul", "George",
    "Oliver", "Henry",
];

pub const FR_FEMALE_FIRST_NAMES: [&str; 12] = [
    "Camille", "Léa", "Manon", "Chloé", "Inès", "Juliette", "Louise", "Margaux", "Élodie",
    "Sophie", "Céline", "Amélie",
];

pub const FR_MALE_FIRST_NAMES: [&str; 12] = [
    "Lucas", "Hugo", "Louis", "Jules", "Mathieu", "Guillaume", "Nicolas", "Julien", "Antoine",
    "Pierre", "Théo", "Baptiste",
];

pub const PT_FEMALE_FIRST_NAMES: [&str; 12] = [
    "Ana", "Beatriz", "Mariana", "Juliana", "Fernanda", "Camila", "Larissa", "Gabriela",
    "Letícia", "Carolina", "Patrícia", "Luana",
];

pub const PT_MALE_FIRST_NAMES: [&str; 12] = [
    "João", "Pedro", "Lucas", "Gabriel", "Rafael", "Bruno", "Thiago", "Felipe", "Gustavo",
    "Rodrigo", "Daniel", "Bernardo",
];

pub const JA_FEMALE_FIRST_NAMES: [&str; 10] = [
    "陽菜", "結衣", "さくら", "美咲", "葵", "花子", "優子", "彩", "真由美", "明美",
];

pub const JA_MALE_FIRST_NAMES: [&str; 10] = [
    "翔太", "大輔", "健太", "拓也", "蓮", "悠真", "太郎", "誠", "浩二", "直樹",
];

pub const ZH_FEMALE_FIRST_NAMES: [&str; 10] = [
    "秀英", "桂英", "丽", "静", "敏", "燕", "婷", "雪", "芳", "慧",
];

pub const ZH_MALE_FIRST_NAMES: [&str; 10] = [
    "伟", "强", "磊", "军", "勇", "杰", "涛", "斌", "浩", "明",
];

pub const AR_FEMALE_FIRST_NAMES: [&str; 10] = [
    "فاطمة", "مريم", "عائشة", "نور", "سارة", "ليلى", "هدى", "زينب", "ريم", "سلمى",
];

pub const AR_MALE_FIRST_NAMES: [&str; 10] = [
    "محمد", "أحمد", "علي", "عمر", "يوسف", "خالد", "حسن", "إبراهيم", "سعيد", "طارق",
];

pub const RU_FEMALE_FIRST_NAMES: [&str; 16] = [
    "Анна", "Мария", "Елена", "Ольга", "Наталья", "Татьяна", "Ирина", "Светлана", "Екатерина",
    "Юлия", "Анастасия", "Дарья", "Ксения", "Полина", "Вера", "Людмила",
];

pub const RU_MALE_FIRST_NAMES: [&str; 16] = [
    "Александр", "Дмитрий", "Максим", "Сергей", "Андрей", "Алексей", "Иван", "Михаил", "Николай",
    "Владимир", "Павел", "Евгений", "Олег", "Артём", "Константин", "Григорий",
];

pub const RU_FEMALE_PATRONYMICS: [&str; 12] = [
    "Александровна", "Дмитриевна", "Сергеевна", "Андреевна", "Алексеевна", "Ивановна",
    "Михайловна", "Николаевна", "Владимировна", "Павловна", "Евгеньевна", "Олеговна",
];

pub const RU_MALE_PATRONYMICS: [&str; 12] = [
    "Александрович", "Дмитриевич", "Сергеевич", "Андреевич", "Алексеевич", "Иванович",
    "Михайлович", "Николаевич", "Владимирович", "Павлович", "Евгеньевич", "Олегович",
];

/// Masculine forms; feminine forms are derived from the ending.
pub const RU_SURNAMES: [&str; 16] = [
    "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов", "Михайлов",
    "Новиков", "Фёдоров", "Морозов", "Волков", "Лебедев", "Ильин", "Никитин", "Ковальский",
];

pub const RU_COUNTRIES: [&str; 12] = [
    "Россия", "Беларусь", "Казахстан", "Армения", "Германия", "Франция", "Италия", "Испания",
    "Китай", "Япония", "Канада", "Бразилия",
];

pub const RU_CITIES: [&str; 12] = [
    "Москва", "Санкт-Петербург", "Новосибирск", "Екатеринбург", "Казань", "Нижний Новгород",
    "Челябинск", "Самара", "Омск", "Ростов-на-Дону", "Уфа", "Красноярск",
];

pub const RU_STREETS: [&str; 12] = [
    "Ленина", "Гагарина", "Советская", "Мира", "Молодёжная", "Центральная", "Школьная", "Садовая",
    "Лесная", "Новая", "Пушкина", "Набережная",
];

pub const EN_CONTINENTS: [&str; 7] = [
    "Africa", "Antarctica", "Asia", "Australia", "Europe", "North America", "South America",
];

pub const RU_CONTINENTS: [&str; 7] = [
    "Африка", "Антарктида", "Евразия", "Австралия", "Европа", "Северная Америка", "Южная Америка",
];

pub const EN_COLORS: [&str; 14] = [
    "Red", "Green", "Blue", "Yellow", "Orange", "Purple", "Pink", "Brown", "Black", "White",
    "Gray", "Cyan", "Magenta", "Teal",
];

pub const RU_COLORS: [&str; 12] = [
    "Красный", "Зелёный", "Синий", "Жёлтый", "Оранжевый", "Фиолетовый", "Розовый", "Коричневый",
    "Чёрный", "Белый", "Серый", "Голубой",
];

pub const EN_UNIVERSITIES: [&str; 10] = [
    "Harvard University", "Stanford University", "Yale University", "Princeton University",
    "University of Oxford", "University of Cambridge", "Columbia University",
    "University of Chicago", "Cornell University", "University of Toronto",
];

pub const RU_UNIVERSITIES: [&str; 8] = [
    "МГУ им. М. В. Ломоносова", "СПбГУ", "МФТИ", "МГТУ им. Н. Э. Баумана", "НИУ ВШЭ",
    "НГУ", "Казанский федеральный университет", "Уральский федеральный университет",
];

pub const RU_OCCUPATIONS: [&str; 12] = [
    "Инженер", "Врач", "Учитель", "Программист", "Бухгалтер", "Юрист", "Архитектор", "Повар",
    "Водитель", "Менеджер", "Экономист", "Дизайнер",
];

pub const CAR_BRANDS: [&str; 14] = [
    "Toyota Camry", "Ford Focus", "Volkswagen Golf", "Honda Civic", "BMW X5", "Audi A4",
    "Mercedes-Benz E-Class", "Lada Vesta", "Kia Rio", "Hyundai Solaris", "Skoda Octavia",
    "Nissan Qashqai", "Renault Logan", "Mazda CX-5",
];

pub const CAR_MANUFACTURERS: [&str; 14] = [
    "Toyota", "Ford", "Volkswagen", "Honda", "BMW", "Audi", "Mercedes-Benz", "AvtoVAZ", "Kia",
    "Hyundai", "Skoda", "Nissan", "Renault", "Mazda",
];

pub const AIRPLANES: [&str; 10] = [
    "Airbus A320", "Airbus A321", "Airbus A350", "Boeing 737", "Boeing 747", "Boeing 777",
    "Boeing 787", "Embraer E190", "Sukhoi Superjet 100", "Bombardier CRJ900",
];

/// Cyrillic letters shared with the Latin alphabet, as used on Russian plates.
pub const RU_PLATE_LETTERS: [char; 12] = ['А', 'В', 'Е', 'К', 'М', 'Н', 'О', 'Р', 'С', 'Т', 'У', 'Х'];

/// Feminine form of a Russian surname.
pub fn feminine_surname(surname: &str) -> String {
    if let Some(stem) = surname.strip_suffix("ский") {
        format!("{stem}ская")
    } else if ["ов", "ев", "ёв", "ин", "ын"]
        .iter()
        .any(|ending| surname.ends_with(ending))
    {
        format!("{surname}а")
    } else {
        surname.to_owned()
    }
}
