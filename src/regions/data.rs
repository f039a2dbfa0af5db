use super::{District, Region};

/// 서울 and 경기 districts offered by the location pickers
pub static REGIONS: &[Region] = &[
    Region {
        name: "서울",
        districts: &[
            District { name: "강남구", neighborhoods: &["강남", "역삼", "신사", "압구정", "삼성"] },
            District { name: "강동구", neighborhoods: &["강일", "성수", "천호"] },
            District { name: "강북구", neighborhoods: &["수유", "미아", "도봉"] },
            District { name: "강서구", neighborhoods: &["등촌", "방화", "발산"] },
            District { name: "관악구", neighborhoods: &["봉천", "신림", "인헌"] },
            District { name: "광진구", neighborhoods: &["광장", "자양", "중곡"] },
            District { name: "구로구", neighborhoods: &["구로", "고척", "가리봉"] },
            District { name: "금천구", neighborhoods: &["독산", "시흥"] },
            District { name: "노원구", neighborhoods: &["노원", "상계", "중계"] },
            District { name: "도봉구", neighborhoods: &["도봉", "창동", "쌍문"] },
            District { name: "동대문구", neighborhoods: &["용두", "신설", "제기"] },
            District { name: "동작구", neighborhoods: &["노량진", "흑석", "보라매"] },
            District { name: "마포구", neighborhoods: &["합정", "망원", "연남"] },
            District { name: "서대문구", neighborhoods: &["홍제", "남가좌", "북가좌"] },
            District { name: "서초구", neighborhoods: &["서초", "방배", "양재"] },
            District { name: "성동구", neighborhoods: &["성수", "왕십리", "행당"] },
            District { name: "성북구", neighborhoods: &["성북", "길음", "석관"] },
            District { name: "송파구", neighborhoods: &["송파", "풍납", "방이"] },
            District { name: "양천구", neighborhoods: &["목동", "신정", "여의도"] },
            District { name: "영등포구", neighborhoods: &["여의동", "영등포", "당산"] },
            District { name: "용산구", neighborhoods: &["한남", "이태원", "서빙고"] },
            District { name: "은평구", neighborhoods: &["불광", "역촌", "녹번"] },
            District { name: "종로구", neighborhoods: &["종로", "을지로", "무악"] },
            District { name: "중구", neighborhoods: &["명동", "소공", "충무로"] },
            District { name: "중랑구", neighborhoods: &["면목", "상봉", "중랑"] },
        ],
    },
    Region {
        name: "경기",
        districts: &[
            District { name: "수원시", neighborhoods: &["팔달", "영통", "권선", "장안"] },
            District { name: "성남시", neighborhoods: &["분당", "수정", "중원"] },
            District { name: "인천시", neighborhoods: &["부평", "남동", "연수", "서구"] },
            District { name: "의정부시", neighborhoods: &["의정부", "가능"] },
            District { name: "안산시", neighborhoods: &["단원", "상록"] },
            District { name: "고양시", neighborhoods: &["일산", "덕양"] },
            District { name: "과천시", neighborhoods: &["과천"] },
            District { name: "하남시", neighborhoods: &["하남"] },
            District { name: "이천시", neighborhoods: &["이천"] },
            District { name: "여주시", neighborhoods: &["여주"] },
        ],
    },
];
